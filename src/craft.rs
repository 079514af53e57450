//! Parsing and balancing for the craft recipe notation.
//!
//! The notation is a single braced document:
//!
//! ```text
//! (name, craftTimeSeconds, outputQuantity, ingredient1, ingredient2, ...)
//! ```
//!
//! where each ingredient is itself `(name, craftTimeSeconds, outputQuantity,
//! ...)*neededQuantity`. Comments run from `#` to end of line; whitespace is
//! insignificant.
//!
//! Data flows strictly forward through the modules here:
//! text → [`lexer`] → [`parser`] (raw tree, then normalization) → [`recipe`]
//! (typed tree) → [`solver`] (equilibrium map). No stage reaches backward.

pub mod lexer;
pub mod parser;
pub mod processor;
pub mod recipe;
pub mod solver;
pub mod source;
