//! Pickup spawning system: drops coins and fuel on countdown timers.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use tankwar_core::enums::PickupKind;

use crate::engine::SimConfig;
use crate::world_setup;

/// Countdown (seconds) until the next spawn of each pickup kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnTimers {
    pub coin: f32,
    pub fuel: f32,
}

impl SpawnTimers {
    /// Both timers start a full interval away.
    pub fn new(config: &SimConfig) -> Self {
        Self {
            coin: config.coin_spawn_interval,
            fuel: config.fuel_spawn_interval,
        }
    }
}

/// Advance both timers by `dt` and spawn whatever is due.
/// A due timer restarts from the full interval; any overshoot is dropped.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timers: &mut SpawnTimers,
    config: &SimConfig,
    dt: f32,
) {
    let arena = config.arena();

    timers.coin -= dt;
    if timers.coin <= 0.0 {
        world_setup::spawn_pickup(world, rng, PickupKind::Coin, arena);
        timers.coin = config.coin_spawn_interval;
        debug!("coin spawned");
    }

    timers.fuel -= dt;
    if timers.fuel <= 0.0 {
        world_setup::spawn_pickup(world, rng, PickupKind::Fuel, arena);
        timers.fuel = config.fuel_spawn_interval;
        debug!("fuel spawned");
    }
}
