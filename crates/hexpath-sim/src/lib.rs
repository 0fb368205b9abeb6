//! Headless crowd simulation on a random hex map.
//!
//! Actors pick random goals, ask [`hexpath::HexAStar`] for a route and walk
//! it one tile per tick, re-pathing when another actor steps into their way.

pub mod logger;
pub mod world;

pub use world::{Actor, SimConfig, World, WorldStats};
