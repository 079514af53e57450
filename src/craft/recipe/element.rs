//! Recipe element type.

use serde::Serialize;

/// One node of the recipe graph.
///
/// `needed_quantity` is the quantity of *this* element consumed by one
/// invocation of whatever references it as an ingredient; it is attached to
/// the element's own definition, not to the parent. Names must be unique
/// across the tree: the solver keys its map by name and silently overwrites
/// on collision. Created once by the builder, read-only afterward.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecipeElement {
    pub name: String,
    pub craft_time_seconds: f64,
    pub output_quantity: i64,
    pub needed_quantity: i64,
    pub ingredients: Vec<RecipeElement>,
}

impl RecipeElement {
    /// Look up a direct or transitive ingredient by name.
    pub fn find(&self, name: &str) -> Option<&RecipeElement> {
        if self.name == name {
            return Some(self);
        }
        self.ingredients.iter().find_map(|i| i.find(name))
    }
}
