//! # craftbal
//!
//! A parser and equilibrium balancer for the craft recipe notation.
//!
//! A recipe document describes an item, its craft time in seconds, its output
//! quantity per batch, and the sub-recipes it consumes. The pipeline turns
//! the notation into a syntax tree, normalizes it, extracts the typed recipe
//! tree, and computes the production-rate ratios at which every element's
//! supply exactly meets its parent's demand.

pub mod craft;
