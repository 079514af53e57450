//! Typed recipe tree extracted from the normalized syntax tree.

pub mod builder;
pub mod element;

pub use builder::{build_recipe_tree, RecipeError};
pub use element::RecipeElement;
