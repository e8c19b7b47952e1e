//! Events emitted by the engine for audio and UI feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player fired a shot.
    ShotFired { position: Vec2, angle: f32 },
    /// A shot destroyed an enemy.
    EnemyDestroyed { position: Vec2 },
    /// The player picked up a coin. `coins` is the new total.
    CoinCollected { coins: u32 },
    /// The player picked up fuel. `fuel` is the new, not yet clamped, level.
    FuelCollected { fuel: f32 },
    /// An enemy is touching the turret. `energy` is the level after damage.
    PlayerHit { energy: f32 },
    /// A new wave of enemies entered the arena.
    WaveStarted { wave: u32, enemies: u32 },
}
