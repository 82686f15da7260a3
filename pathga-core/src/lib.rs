//! This crate contains a genetic algorithm which searches for a short open visiting path over a
//! small set of locations. The path always starts at the first location (origin) and does not
//! return to it.
//!
//! The algorithm keeps a fixed size population of candidate paths and runs a fixed amount of
//! generations, each of them consists of:
//! - **selection**: randomized duels between paths, the cheaper one survives
//! - **recombination**: order-preserving crossover restores the population size
//! - **mutation**: a rare swap of two positions, the origin never moves
//!
//! Travel costs are provided by a [`costs::TravelCostService`] and memoized by
//! [`costs::CostOracle`], so each ordered pair of locations is requested at most once.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod costs;
pub mod evolution;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
