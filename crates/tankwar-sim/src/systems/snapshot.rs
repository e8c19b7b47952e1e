//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::{Entity, World};

use tankwar_core::components::*;
use tankwar_core::constants::{LIFE_BAR_HEIGHT, LIFE_BAR_OFFSET_Y, LIFE_BAR_WIDTH};
use tankwar_core::events::GameEvent;
use tankwar_core::state::*;
use tankwar_core::types::{SimTime, Transform};

use crate::world_setup::Actors;

/// Build a complete GameStateSnapshot from the current world state.
/// Before setup there are no actors, and player, turret and life bar stay
/// at their defaults.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    wave: u32,
    actors: Option<Actors>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let player = actors
        .and_then(|a| build_player(world, a.player))
        .unwrap_or_default();
    let turret = actors
        .and_then(|a| build_turret(world, a.turret))
        .unwrap_or_default();
    let life_bar = if actors.is_some() {
        build_life_bar(&player)
    } else {
        LifeBarView::default()
    };

    GameStateSnapshot {
        time: *time,
        wave,
        player,
        turret,
        life_bar,
        enemies: build_enemies(world),
        shots: build_shots(world),
        pickups: build_pickups(world),
        explosions: build_explosions(world),
        tire_tracks: build_tire_tracks(world),
        events,
    }
}

fn build_player(world: &World, player: Entity) -> Option<PlayerView> {
    let transform = world.get::<&Transform>(player).ok()?;
    let stats = world.get::<&PlayerStats>(player).ok()?;
    Some(PlayerView {
        position: transform.position,
        angle: transform.angle,
        fuel: stats.fuel,
        energy: stats.energy,
        max_energy: stats.max_energy,
        coins: stats.coins,
    })
}

fn build_turret(world: &World, turret: Entity) -> Option<TurretView> {
    let transform = world.get::<&Transform>(turret).ok()?;
    let state = world.get::<&Turret>(turret).ok()?;
    Some(TurretView {
        position: transform.position,
        angle: transform.angle,
        relative_angle: state.relative_angle,
    })
}

/// Energy bar centred above the player.
fn build_life_bar(player: &PlayerView) -> LifeBarView {
    let fraction = if player.max_energy > 0.0 {
        (player.energy / player.max_energy).clamp(0.0, 1.0)
    } else {
        0.0
    };
    LifeBarView {
        center: player.position + glam::Vec2::new(0.0, LIFE_BAR_OFFSET_Y),
        full_width: LIFE_BAR_WIDTH,
        filled_width: LIFE_BAR_WIDTH * fraction,
        height: LIFE_BAR_HEIGHT,
        fraction,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Transform)>()
        .iter()
        .map(|(_, (_, t))| EnemyView {
            position: t.position,
            angle: t.angle,
        })
        .collect()
}

fn build_shots(world: &World) -> Vec<ShotView> {
    world
        .query::<(&Shot, &Transform)>()
        .iter()
        .map(|(_, (_, t))| ShotView {
            position: t.position,
            angle: t.angle,
        })
        .collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    world
        .query::<(&Pickup, &Transform)>()
        .iter()
        .map(|(_, (pickup, t))| PickupView {
            kind: pickup.kind,
            position: t.position,
        })
        .collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Explosion, &Transform)>()
        .iter()
        .map(|(_, (explosion, t))| ExplosionView {
            position: t.position,
            scale: explosion.scale,
        })
        .collect()
}

fn build_tire_tracks(world: &World) -> Vec<TireTrackView> {
    world
        .query::<(&TireTrack, &Transform)>()
        .iter()
        .map(|(_, (track, t))| TireTrackView {
            position: t.position,
            angle: t.angle,
            alpha: track.alpha,
        })
        .collect()
}
