//! Resource systems: fuel burn and the bounds on fuel and energy.
//!
//! Out-of-range values are clamped, never reported as errors. Coins are
//! purely additive and have no clamp.

use hecs::{Entity, World};

use tankwar_core::components::PlayerStats;
use tankwar_core::constants::{FUEL_DRAIN_DIVISOR, FUEL_MAX, FUEL_MIN};

/// Burn fuel while thrusting: `dt * fuel / FUEL_DRAIN_DIVISOR` per tick.
pub fn drain_fuel(world: &mut World, player: Entity, thrusting: bool, dt: f32) {
    if !thrusting {
        return;
    }
    if let Ok(mut stats) = world.get::<&mut PlayerStats>(player) {
        stats.fuel -= dt * stats.fuel / FUEL_DRAIN_DIVISOR;
    }
}

/// Clamp fuel into [FUEL_MIN, FUEL_MAX]. The floor is above zero, so the
/// tank never runs completely dry.
pub fn clamp_fuel(world: &mut World, player: Entity) {
    if let Ok(mut stats) = world.get::<&mut PlayerStats>(player) {
        stats.fuel = clamp_fuel_level(stats.fuel);
    }
}

/// Clamp energy into [0, max_energy].
pub fn clamp_energy(world: &mut World, player: Entity) {
    if let Ok(mut stats) = world.get::<&mut PlayerStats>(player) {
        stats.energy = clamp_energy_level(stats.energy, stats.max_energy);
    }
}

pub fn clamp_fuel_level(fuel: f32) -> f32 {
    if fuel.is_nan() {
        return FUEL_MIN;
    }
    fuel.clamp(FUEL_MIN, FUEL_MAX)
}

pub fn clamp_energy_level(energy: f32, max_energy: f32) -> f32 {
    if energy.is_nan() {
        return 0.0;
    }
    energy.clamp(0.0, max_energy.max(0.0))
}
