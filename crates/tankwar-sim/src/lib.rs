//! Simulation engine for TANKWAR.
//!
//! Owns the hecs ECS world, runs systems in a fixed per-tick order,
//! and produces GameStateSnapshots for the renderer.

pub mod engine;
pub mod intents;
pub mod steering;
pub mod systems;
pub mod world_setup;

pub use engine::{GameEngine, SimConfig};
pub use tankwar_core as core;

#[cfg(test)]
mod tests;
