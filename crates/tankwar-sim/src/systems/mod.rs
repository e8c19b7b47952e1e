//! ECS systems that operate on the game world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components or is passed in
//! by the engine.

pub mod cleanup;
pub mod collision;
pub mod explosions;
pub mod movement;
pub mod pickup_spawner;
pub mod player_control;
pub mod resources;
pub mod snapshot;
pub mod tire_tracks;
pub mod wave_spawner;
