//! Core types and definitions for TANKWAR.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, geometry, input events, game events, snapshots and constants.
//! It has no dependency on a renderer or any runtime framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
