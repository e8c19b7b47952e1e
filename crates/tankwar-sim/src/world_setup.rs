//! Entity spawn factories for setting up the arena.
//!
//! Creates the player tank, its turret, enemies, pickups, shots and effects
//! with the appropriate component bundles.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tankwar_core::components::*;
use tankwar_core::constants::*;
use tankwar_core::enums::PickupKind;
use tankwar_core::types::{Arena, Hitbox, Transform};

use crate::engine::SimConfig;
use crate::steering;

/// Handles to the long-lived entities every tick needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actors {
    pub player: Entity,
    pub turret: Entity,
}

/// Set up the arena: the player tank and its turret.
/// Enemies are spawned by the wave spawner.
pub fn setup_arena(world: &mut World, config: &SimConfig) -> Actors {
    let player = spawn_player(world, config.max_energy);
    let turret = spawn_turret(world, player);
    Actors { player, turret }
}

/// Spawn the player tank at its start position with full fuel and energy.
pub fn spawn_player(world: &mut World, max_energy: f32) -> Entity {
    world.spawn((
        PlayerTank,
        Transform::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_START_ANGLE),
        Motion::default(),
        Hitbox::new(PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT),
        PlayerStats {
            fuel: FUEL_START,
            energy: max_energy,
            max_energy,
            coins: 0,
        },
    ))
}

/// Spawn a turret locked onto `host`. It takes the host's transform on its
/// first update.
pub fn spawn_turret(world: &mut World, host: Entity) -> Entity {
    let transform = world
        .get::<&Transform>(host)
        .map(|t| *t)
        .unwrap_or_default();

    world.spawn((
        Turret {
            target: host,
            relative_angle: 0.0,
        },
        transform,
        Hitbox::new(TURRET_HALF_WIDTH, TURRET_HALF_HEIGHT),
    ))
}

/// Spawn an enemy at a random in-arena position with a random heading,
/// chasing `target`.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    target: Entity,
    config: &SimConfig,
) -> Entity {
    let arena = config.arena();
    let x: f32 = rng.gen_range(0.0..=arena.width);
    let y: f32 = rng.gen_range(0.0..=arena.height);
    let angle: f32 = rng.gen_range(0.0..360.0);
    spawn_enemy_at(world, target, Vec2::new(x, y), angle, config.enemy_speed)
}

/// Spawn an enemy at a fixed position.
pub fn spawn_enemy_at(
    world: &mut World,
    target: Entity,
    position: Vec2,
    angle: f32,
    speed: f32,
) -> Entity {
    world.spawn((
        Enemy { target, speed },
        Transform::new(position.x, position.y, angle),
        Hitbox::square(ENEMY_HALF_EXTENT),
    ))
}

/// Spawn a pickup at a uniformly random position inside the arena.
pub fn spawn_pickup(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: PickupKind,
    arena: Arena,
) -> Entity {
    let x: f32 = rng.gen_range(1.0..=arena.width);
    let y: f32 = rng.gen_range(1.0..=arena.height);
    spawn_pickup_at(world, kind, Vec2::new(x, y))
}

pub fn spawn_pickup_at(world: &mut World, kind: PickupKind, position: Vec2) -> Entity {
    world.spawn((
        Pickup { kind },
        Transform::new(position.x, position.y, 0.0),
        Hitbox::square(PICKUP_HALF_EXTENT),
    ))
}

/// Spawn a shot travelling along `angle` from `position`.
pub fn spawn_shot(world: &mut World, position: Vec2, angle: f32) -> Entity {
    world.spawn((
        Shot {
            velocity: steering::forward(angle, SHOT_SPEED),
        },
        Transform::new(position.x, position.y, angle),
        Hitbox::square(SHOT_HALF_EXTENT),
    ))
}

pub fn spawn_explosion(world: &mut World, position: Vec2) -> Entity {
    world.spawn((
        Explosion {
            remaining_secs: EXPLOSION_LIFETIME,
            scale: EXPLOSION_START_SCALE,
        },
        Transform::new(position.x, position.y, 0.0),
    ))
}

/// Spawn a tire-track decal under a tank.
pub fn spawn_tire_track(world: &mut World, transform: Transform) -> Entity {
    world.spawn((
        TireTrack {
            age_secs: 0.0,
            lifetime_secs: TIRE_TRACK_LIFETIME,
            alpha: TIRE_TRACK_MAX_ALPHA,
        },
        transform,
    ))
}
