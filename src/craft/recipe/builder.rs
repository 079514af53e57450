//! Recipe tree builder.
//!
//! Consumes the normalized syntax tree and produces the typed recipe tree.
//! The builder only fails when a quantity or time field does not convert to
//! a number; structural oddities left over from normalization are absorbed
//! by the transparent-wrapper rule.

use std::fmt;

use super::element::RecipeElement;
use crate::craft::parser::{SyntaxNode, SyntaxTag};

/// Errors from recipe extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeError {
    InvalidCraftTime(String),
    InvalidOutputQuantity(String),
    InvalidNeededQuantity(String),
}

impl fmt::Display for RecipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeError::InvalidCraftTime(value) => {
                write!(f, "invalid craft time '{}': not a number", value)
            }
            RecipeError::InvalidOutputQuantity(value) => {
                write!(f, "invalid output quantity '{}': not an integer", value)
            }
            RecipeError::InvalidNeededQuantity(value) => {
                write!(f, "invalid needed quantity '{}': not an integer", value)
            }
        }
    }
}

impl std::error::Error for RecipeError {}

/// Build the recipe tree from a normalized syntax tree.
pub fn build_recipe_tree(root: &SyntaxNode) -> Result<RecipeElement, RecipeError> {
    let mut element = RecipeElement::default();
    fill_element(root, &mut element)?;
    Ok(element)
}

// A node with more than four children is a definition: name, craft time,
// output quantity, one ingredient per argument child, then the multiplier
// that becomes this element's own needed quantity. Anything smaller is a
// transparent wrapper that keeps populating the same element.
fn fill_element(node: &SyntaxNode, out: &mut RecipeElement) -> Result<(), RecipeError> {
    let mut cursor = 0;

    if node.children.len() > 4 {
        out.name = node.children[0].value.clone();
        out.craft_time_seconds = node.children[1]
            .value
            .parse()
            .map_err(|_| RecipeError::InvalidCraftTime(node.children[1].value.clone()))?;
        out.output_quantity = node.children[2]
            .value
            .parse()
            .map_err(|_| RecipeError::InvalidOutputQuantity(node.children[2].value.clone()))?;
        cursor = 3;

        while node
            .children
            .get(cursor)
            .is_some_and(|child| child.tag == SyntaxTag::Argument)
        {
            let mut ingredient = RecipeElement::default();
            fill_element(&node.children[cursor], &mut ingredient)?;
            out.ingredients.push(ingredient);
            cursor += 1;
        }

        // After the ingredient run sits the multiply marker and the integer
        // that is this element's own needed quantity. The document root may
        // carry no multiplier at all.
        if let Some(count) = node.children.get(cursor + 1) {
            out.needed_quantity = count
                .value
                .parse()
                .map_err(|_| RecipeError::InvalidNeededQuantity(count.value.clone()))?;
        }
    }

    for child in &node.children[cursor..] {
        fill_element(child, out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::craft::lexer::lex;
    use crate::craft::parser::{collapse_chains, flatten_expressions, parse};

    fn build(source: &str) -> Result<RecipeElement, RecipeError> {
        let mut tree = parse(&lex(source)).unwrap();
        collapse_chains(&mut tree);
        flatten_expressions(&mut tree);
        build_recipe_tree(&tree)
    }

    #[test]
    fn test_circuit_round_trip() {
        let recipe = build(
            "(circuit, 0.5, 2, (metal_plate, 0.0, 1,)*1, \
             (copper_wire, 0.5, 2, (copper_plate, 0.0, 1,)*1,)*3,)",
        )
        .unwrap();

        assert_eq!(recipe.name, "circuit");
        assert_eq!(recipe.craft_time_seconds, 0.5);
        assert_eq!(recipe.output_quantity, 2);
        assert_eq!(recipe.ingredients.len(), 2);

        let metal = &recipe.ingredients[0];
        assert_eq!(metal.name, "metal_plate");
        assert_eq!(metal.craft_time_seconds, 0.0);
        assert_eq!(metal.needed_quantity, 1);
        assert!(metal.ingredients.is_empty());

        let wire = &recipe.ingredients[1];
        assert_eq!(wire.name, "copper_wire");
        assert_eq!(wire.craft_time_seconds, 0.5);
        assert_eq!(wire.needed_quantity, 3);
        assert_eq!(wire.ingredients.len(), 1);

        let plate = &wire.ingredients[0];
        assert_eq!(plate.name, "copper_plate");
        assert_eq!(plate.needed_quantity, 1);
    }

    #[test]
    fn test_root_with_multiplier() {
        let recipe = build("(gear, 0.5, 1, (iron_plate, 0.0, 2,)*2,)*2").unwrap();
        assert_eq!(recipe.name, "gear");
        assert_eq!(recipe.needed_quantity, 2);
        assert_eq!(recipe.ingredients.len(), 1);
    }

    #[test]
    fn test_root_without_multiplier_has_zero_needed_quantity() {
        let recipe =
            build("(circuit, 0.5, 2, (metal_plate, 0.0, 1,)*1, (screw, 0.0, 1,)*4,)").unwrap();
        assert_eq!(recipe.name, "circuit");
        assert_eq!(recipe.needed_quantity, 0);
    }

    #[test]
    fn test_single_ingredient_wrapper_rule() {
        // A root with one ingredient and no multiplier has only four
        // children after flattening, so it is treated as a transparent
        // wrapper and the ingredient definition fills the element instead.
        let recipe = build("(circuit, 0.5, 2, (metal_plate, 0.0, 1,)*1,)").unwrap();
        assert_eq!(recipe.name, "metal_plate");
        assert_eq!(recipe.needed_quantity, 1);
        assert!(recipe.ingredients.is_empty());
    }

    #[test]
    fn test_invalid_craft_time() {
        assert_eq!(
            build("(a, soon, 2, (b, 0.0, 1,)*1, (c, 0.0, 1,)*1,)"),
            Err(RecipeError::InvalidCraftTime("soon".to_string()))
        );
    }

    #[test]
    fn test_invalid_output_quantity() {
        // 2.5 is a valid float but not a valid integer quantity.
        assert_eq!(
            build("(a, 1.0, 2.5, (b, 0.0, 1,)*1, (c, 0.0, 1,)*1,)"),
            Err(RecipeError::InvalidOutputQuantity("2.5".to_string()))
        );
    }

    #[test]
    fn test_integer_craft_time_is_accepted() {
        let recipe = build("(a, 1, 2, (b, 0.0, 1,)*1, (c, 0.0, 1,)*1,)").unwrap();
        assert_eq!(recipe.name, "a");
        assert_eq!(recipe.craft_time_seconds, 1.0);
    }
}
