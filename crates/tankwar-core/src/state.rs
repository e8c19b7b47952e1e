//! Game state snapshot: the complete visible state handed to the renderer each tick.
//!
//! Snapshots are owned copies. A renderer drawing one never observes a
//! half-updated world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::PickupKind;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    /// Number of waves started so far.
    pub wave: u32,
    pub player: PlayerView,
    pub turret: TurretView,
    pub life_bar: LifeBarView,
    pub enemies: Vec<EnemyView>,
    pub shots: Vec<ShotView>,
    pub pickups: Vec<PickupView>,
    pub explosions: Vec<ExplosionView>,
    pub tire_tracks: Vec<TireTrackView>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub angle: f32,
    pub fuel: f32,
    pub energy: f32,
    pub max_energy: f32,
    pub coins: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurretView {
    pub position: Vec2,
    /// Absolute heading (relative angle plus host heading).
    pub angle: f32,
    pub relative_angle: f32,
}

/// Filled rectangle drawn above the player, proportional to remaining energy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifeBarView {
    pub center: Vec2,
    /// Width of the bar at full energy.
    pub full_width: f32,
    /// Width of the filled part.
    pub filled_width: f32,
    pub height: f32,
    /// energy / max_energy in [0, 1].
    pub fraction: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub position: Vec2,
    pub angle: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShotView {
    pub position: Vec2,
    pub angle: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub kind: PickupKind,
    pub position: Vec2,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Vec2,
    pub scale: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TireTrackView {
    pub position: Vec2,
    pub angle: f32,
    pub alpha: f32,
}
