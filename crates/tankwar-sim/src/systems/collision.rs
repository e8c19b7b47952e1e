//! Collision resolver: pairwise overlap passes between entity sets.
//!
//! Every pass is a plain nested scan over the live entities of two sets.
//! An entity consumed by one hit is skipped by the remaining checks, so no
//! kill or reward is ever counted twice.

use glam::Vec2;
use hecs::{Entity, World};

use tankwar_core::components::{Enemy, Pickup, PlayerStats, Shot};
use tankwar_core::constants::{COIN_VALUE, ENEMY_KILL_COINS, FUEL_VALUE, TURRET_CONTACT_DAMAGE};
use tankwar_core::enums::PickupKind;
use tankwar_core::events::GameEvent;
use tankwar_core::types::{Aabb, Hitbox, Transform};

use crate::systems::cleanup;
use crate::world_setup::{self, Actors};

/// What the collision passes did this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionResult {
    pub enemies_destroyed: u32,
    pub coins_collected: u32,
    pub fuel_collected: u32,
    /// Enemies touching the turret (one energy loss each).
    pub turret_contacts: u32,
}

/// Run all collision passes in order: shot↔enemy, player↔coin, player↔fuel,
/// enemy↔turret. Killed entities are despawned before returning. Energy and
/// fuel are left unclamped for the clamp passes.
pub fn run(
    world: &mut World,
    actors: Actors,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> CollisionResult {
    let mut result = CollisionResult::default();

    let Some(player_box) = bounds_of(world, actors.player) else {
        return result;
    };
    let turret_box = bounds_of(world, actors.turret);
    let Some(mut stats) = world.get::<&PlayerStats>(actors.player).ok().map(|s| *s) else {
        return result;
    };

    let shots: Vec<(Entity, Aabb)> = world
        .query::<(&Shot, &Transform, &Hitbox)>()
        .iter()
        .map(|(entity, (_shot, t, hitbox))| (entity, hitbox.bounds(t.position)))
        .collect();

    let enemies: Vec<(Entity, Vec2, Aabb)> = world
        .query::<(&Enemy, &Transform, &Hitbox)>()
        .iter()
        .map(|(entity, (_enemy, t, hitbox))| (entity, t.position, hitbox.bounds(t.position)))
        .collect();

    let pickups: Vec<(Entity, PickupKind, Aabb)> = world
        .query::<(&Pickup, &Transform, &Hitbox)>()
        .iter()
        .map(|(entity, (pickup, t, hitbox))| (entity, pickup.kind, hitbox.bounds(t.position)))
        .collect();

    // Shot ↔ enemy: a shot is used up by the first enemy it hits.
    let mut killed_enemies: Vec<Entity> = Vec::new();
    let mut explosions: Vec<Vec2> = Vec::new();
    for (shot, shot_box) in &shots {
        let hit = enemies.iter().find(|(enemy, _, enemy_box)| {
            !killed_enemies.contains(enemy) && shot_box.overlaps(enemy_box)
        });
        if let Some(&(enemy, position, _)) = hit {
            killed_enemies.push(enemy);
            despawn_buffer.push(*shot);
            despawn_buffer.push(enemy);
            explosions.push(position);
            stats.coins = stats.coins.saturating_add(ENEMY_KILL_COINS);
            result.enemies_destroyed += 1;
            events.push(GameEvent::EnemyDestroyed { position });
        }
    }

    // Player ↔ coin
    for (pickup, _, pickup_box) in pickups
        .iter()
        .filter(|(_, kind, _)| *kind == PickupKind::Coin)
    {
        if player_box.overlaps(pickup_box) {
            despawn_buffer.push(*pickup);
            stats.coins = stats.coins.saturating_add(COIN_VALUE);
            result.coins_collected += 1;
            events.push(GameEvent::CoinCollected { coins: stats.coins });
        }
    }

    // Player ↔ fuel
    for (pickup, _, pickup_box) in pickups
        .iter()
        .filter(|(_, kind, _)| *kind == PickupKind::Fuel)
    {
        if player_box.overlaps(pickup_box) {
            despawn_buffer.push(*pickup);
            stats.fuel += FUEL_VALUE;
            result.fuel_collected += 1;
            events.push(GameEvent::FuelCollected { fuel: stats.fuel });
        }
    }

    // Enemy ↔ turret: continuous drain while touching, not debounced.
    if let Some(turret_box) = turret_box {
        for (enemy, _, enemy_box) in &enemies {
            if killed_enemies.contains(enemy) || !turret_box.overlaps(enemy_box) {
                continue;
            }
            stats.energy -= TURRET_CONTACT_DAMAGE;
            result.turret_contacts += 1;
            events.push(GameEvent::PlayerHit {
                energy: stats.energy,
            });
        }
    }

    if let Ok(mut live) = world.get::<&mut PlayerStats>(actors.player) {
        *live = stats;
    }

    for position in explosions {
        world_setup::spawn_explosion(world, position);
    }

    cleanup::flush(world, despawn_buffer);
    result
}

/// World-space bounding box of an entity with a Transform and a Hitbox.
fn bounds_of(world: &World, entity: Entity) -> Option<Aabb> {
    let transform = world.get::<&Transform>(entity).ok()?;
    let hitbox = world.get::<&Hitbox>(entity).ok()?;
    Some(hitbox.bounds(transform.position))
}
