//! Equilibrium computation.
//!
//! A post-order pass over the recipe tree balances every element's supply
//! rate against the demand placed on it. The balanced throughput is the
//! decimal LCM of the two rates; dividing it back by each rate gives the
//! smallest parallel-instance counts at which supply meets demand exactly.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::decimal::decimal_lcm;
use crate::craft::recipe::RecipeElement;

/// Sentinel rate for elements with zero craft time: an instantaneous
/// resource satisfies any demand without scaling.
pub const UNBOUNDED_RATE: f64 = -1.0;

/// Balanced scale factors for one element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equilibrium {
    /// Parallel consumers needed to hit the balanced throughput.
    pub demand_scale: f64,
    /// Parallel producers needed to hit the balanced throughput.
    pub supply_scale: f64,
    /// Supply scales of this element's ingredients, in ingredient order.
    pub child_scales: Vec<f64>,
}

impl fmt::Display for Equilibrium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "demand {} / supply {}, child scales {:?}",
            self.demand_scale, self.supply_scale, self.child_scales
        )
    }
}

/// Equilibrium results keyed by element name. Last write wins on name
/// collisions; name uniqueness is the caller's invariant.
pub type EquilibriumMap = BTreeMap<String, Equilibrium>;

/// Units produced per second, or [`UNBOUNDED_RATE`] for zero craft time.
pub fn supply_per_second(element: &RecipeElement) -> f64 {
    if element.craft_time_seconds == 0.0 {
        return UNBOUNDED_RATE;
    }
    element.output_quantity as f64 / element.craft_time_seconds
}

/// Units consumed per second by this element's consumer, or
/// [`UNBOUNDED_RATE`] for zero craft time.
pub fn demand_per_second(element: &RecipeElement) -> f64 {
    if element.craft_time_seconds == 0.0 {
        return UNBOUNDED_RATE;
    }
    element.needed_quantity as f64 / element.craft_time_seconds
}

/// Solve the whole tree.
///
/// The root's map entry is rewritten after the recursive pass with an empty
/// child-scale list; the list collected for the root during recursion is
/// discarded.
pub fn solve(root: &RecipeElement) -> EquilibriumMap {
    let mut equilibrium = EquilibriumMap::new();
    let (demand_scale, supply_scale) = solve_element(root, &mut equilibrium);
    equilibrium.insert(
        root.name.clone(),
        Equilibrium {
            demand_scale,
            supply_scale,
            child_scales: Vec::new(),
        },
    );
    equilibrium
}

// Returns (demand_scale, supply_scale): how many parallel consumers and
// producers of this element run at the same throughput.
fn solve_element(element: &RecipeElement, equilibrium: &mut EquilibriumMap) -> (f64, f64) {
    let mut child_scales = Vec::new();
    for ingredient in &element.ingredients {
        let (_, supply_scale) = solve_element(ingredient, equilibrium);
        child_scales.push(supply_scale);
    }

    let supply = supply_per_second(element);
    let demand = demand_per_second(element);
    if supply == UNBOUNDED_RATE || demand == UNBOUNDED_RATE {
        // An unbounded element never forces scaling on its parent.
        return (1.0, 1.0);
    }
    if demand == 0.0 {
        // Nothing consumes this element (a root without a multiplier);
        // there is no demand to balance against.
        equilibrium.insert(
            element.name.clone(),
            Equilibrium {
                demand_scale: 1.0,
                supply_scale: 1.0,
                child_scales,
            },
        );
        return (1.0, 1.0);
    }

    let rate = decimal_lcm(supply, demand);
    let demand_scale = rate / demand;
    let supply_scale = rate / supply;
    equilibrium.insert(
        element.name.clone(),
        Equilibrium {
            demand_scale,
            supply_scale,
            child_scales,
        },
    );

    (demand_scale, supply_scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(
        name: &str,
        craft_time_seconds: f64,
        output_quantity: i64,
        needed_quantity: i64,
        ingredients: Vec<RecipeElement>,
    ) -> RecipeElement {
        RecipeElement {
            name: name.to_string(),
            craft_time_seconds,
            output_quantity,
            needed_quantity,
            ingredients,
        }
    }

    #[test]
    fn test_rates() {
        let wire = element("copper_wire", 0.5, 2, 3, vec![]);
        assert_eq!(supply_per_second(&wire), 4.0);
        assert_eq!(demand_per_second(&wire), 6.0);
    }

    #[test]
    fn test_zero_craft_time_is_unbounded() {
        let plate = element("metal_plate", 0.0, 1, 5, vec![]);
        assert_eq!(supply_per_second(&plate), UNBOUNDED_RATE);
        assert_eq!(demand_per_second(&plate), UNBOUNDED_RATE);
    }

    #[test]
    fn test_simple_balance() {
        // Produces 2/s, consumers want 3/s: the balanced throughput is 6/s,
        // reached by 2 consumers and 3 producers.
        let root = element("a", 1.0, 2, 3, vec![]);
        let map = solve(&root);
        let result = &map["a"];
        assert_eq!(result.demand_scale, 2.0);
        assert_eq!(result.supply_scale, 3.0);
    }

    #[test]
    fn test_unbounded_ingredient_is_neutral() {
        let raw = element("ore", 0.0, 1, 9, vec![]);
        let root = element("plate", 2.0, 6, 1, vec![raw]);
        let map = solve(&root);

        // The unbounded ingredient writes no entry of its own; the root's
        // entry is rewritten with an empty child-scale list.
        assert!(!map.contains_key("ore"));
        assert_eq!(map["plate"].child_scales, Vec::<f64>::new());

        // plate: supply 3/s, demand 0.5/s, LCM 3 -> 6 consumers, 1 producer.
        assert_eq!(map["plate"].demand_scale, 6.0);
        assert_eq!(map["plate"].supply_scale, 1.0);
    }

    #[test]
    fn test_circuit_tree() {
        let copper_plate = element("copper_plate", 0.0, 1, 1, vec![]);
        let copper_wire = element("copper_wire", 0.5, 2, 3, vec![copper_plate]);
        let metal_plate = element("metal_plate", 0.0, 1, 1, vec![]);
        let circuit = element("circuit", 0.5, 2, 4, vec![metal_plate, copper_wire]);

        let map = solve(&circuit);

        // copper_wire: supply 4/s, demand 6/s, LCM 12 -> 2 consumers,
        // 3 producers; its only ingredient is unbounded.
        assert_eq!(map["copper_wire"].demand_scale, 2.0);
        assert_eq!(map["copper_wire"].supply_scale, 3.0);
        assert_eq!(map["copper_wire"].child_scales, vec![1.0]);

        // circuit: supply 4/s, demand 8/s, LCM 8 -> 1 consumer, 2 producers.
        // The root entry is rewritten with an empty child-scale list.
        assert_eq!(map["circuit"].demand_scale, 1.0);
        assert_eq!(map["circuit"].supply_scale, 2.0);
        assert_eq!(map["circuit"].child_scales, Vec::<f64>::new());

        // Unbounded elements never enter the map.
        assert!(!map.contains_key("metal_plate"));
        assert!(!map.contains_key("copper_plate"));
    }

    #[test]
    fn test_root_without_consumer_is_neutral() {
        let wire = element("copper_wire", 0.5, 2, 3, vec![]);
        let root = element("circuit", 0.5, 2, 0, vec![wire]);
        let map = solve(&root);

        assert_eq!(map["circuit"].demand_scale, 1.0);
        assert_eq!(map["circuit"].supply_scale, 1.0);
        assert_eq!(map["circuit"].child_scales, Vec::<f64>::new());
        assert_eq!(map["copper_wire"].supply_scale, 3.0);
    }

    #[test]
    fn test_name_collision_last_write_wins() {
        let inner = element("x", 1.0, 1, 2, vec![]);
        let root = element("x", 1.0, 4, 2, vec![inner]);
        let map = solve(&root);

        // The wrapper's final write for the root replaces the inner entry.
        assert_eq!(map.len(), 1);
        assert_eq!(map["x"].child_scales, Vec::<f64>::new());
    }

    #[test]
    fn test_display() {
        let eq = Equilibrium {
            demand_scale: 2.0,
            supply_scale: 3.0,
            child_scales: vec![1.0],
        };
        assert_eq!(format!("{}", eq), "demand 2 / supply 3, child scales [1.0]");
    }
}
