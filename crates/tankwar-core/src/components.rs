//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. `Transform` and `Hitbox`
//! live in `types.rs` and are attached to entities as components too.

use glam::Vec2;
use hecs::Entity;
use serde::{Deserialize, Serialize};

use crate::enums::PickupKind;

/// Marks the player's tank body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerTank;

/// Resources carried by the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Clamped to [FUEL_MIN, FUEL_MAX] once per tick.
    pub fuel: f32,
    /// Clamped to [0, max_energy] once per tick.
    pub energy: f32,
    pub max_energy: f32,
    /// Only ever increases.
    pub coins: u32,
}

/// Displacement requested for the current tick. Consumed and zeroed by the
/// player movement system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Motion {
    pub change: Vec2,
}

/// Aiming overlay rigidly attached to another entity.
#[derive(Debug, Clone, Copy)]
pub struct Turret {
    /// Host entity (the player). Not owned.
    pub target: Entity,
    /// Offset from the host's heading, in degrees.
    pub relative_angle: f32,
}

/// Enemy unit that pursues a target.
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    /// Entity being chased (the player). Not owned.
    pub target: Entity,
    /// Units per second.
    pub speed: f32,
}

/// Projectile fired by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shot {
    /// Displacement per tick, fixed at creation.
    pub velocity: Vec2,
}

/// Collectible item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
}

/// Short-lived blast left behind by a destroyed enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub remaining_secs: f32,
    pub scale: f32,
}

/// Decal left on the ground by a moving tank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TireTrack {
    pub age_secs: f32,
    pub lifetime_secs: f32,
    /// 0..=255. Full for the first half of the lifetime, then fades to zero.
    pub alpha: f32,
}
