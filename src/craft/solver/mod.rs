//! Equilibrium solver for recipe trees.

pub mod decimal;
pub mod equilibrium;

pub use decimal::decimal_lcm;
pub use equilibrium::{
    demand_per_second, solve, supply_per_second, Equilibrium, EquilibriumMap, UNBOUNDED_RATE,
};
