//! Wave spawning system: starts a new enemy wave whenever the arena is clear.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use tankwar_core::components::Enemy;
use tankwar_core::events::GameEvent;

use crate::engine::SimConfig;
use crate::world_setup;

/// Spawn `enemy_base_count + wave_number` enemies chasing `player`.
/// Returns the next wave number.
pub fn start_new_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: Entity,
    wave_number: u32,
    config: &SimConfig,
) -> u32 {
    let count = wave_size(config, wave_number);
    for _ in 0..count {
        world_setup::spawn_enemy(world, rng, player, config);
    }
    wave_number + 1
}

/// Number of enemies in wave `wave_number`.
pub fn wave_size(config: &SimConfig, wave_number: u32) -> u32 {
    config.enemy_base_count.saturating_add(wave_number)
}

/// Start the next wave if no enemies are left. Returns whether one started.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: Entity,
    wave: &mut u32,
    config: &SimConfig,
    events: &mut Vec<GameEvent>,
) -> bool {
    let remaining = world.query::<&Enemy>().iter().count();
    if remaining > 0 {
        return false;
    }

    let enemies = wave_size(config, *wave);
    *wave = start_new_wave(world, rng, player, *wave, config);
    info!(wave = *wave, enemies, "wave started");
    events.push(GameEvent::WaveStarted {
        wave: *wave,
        enemies,
    });
    true
}
