//! TANKWAR application shell.
//!
//! Runs the simulation engine on its own thread and exposes a small control
//! surface (start, input, snapshot polling, stop) for a renderer to drive.

pub mod control;
pub mod demo;
pub mod game_loop;
pub mod state;

pub use tankwar_core as core;
