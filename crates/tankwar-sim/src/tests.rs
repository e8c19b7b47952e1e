//! Tests for the game engine, its systems and the per-tick pipeline.

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tankwar_core::components::{Enemy, Pickup, PlayerStats, Shot, TireTrack};
use tankwar_core::constants::*;
use tankwar_core::enums::{ControllerSetup, JoyAxis, Key, PickupKind};
use tankwar_core::events::GameEvent;
use tankwar_core::input::InputEvent;
use tankwar_core::types::{Arena, Transform};

use crate::engine::{GameEngine, SimConfig};
use crate::systems::collision::{self, CollisionResult};
use crate::systems::{movement, pickup_spawner, tire_tracks, wave_spawner};
use crate::world_setup::{self, Actors};

fn started_engine(config: SimConfig) -> (GameEngine, Actors) {
    let mut engine = GameEngine::new(config);
    engine.setup();
    let actors = engine.actors().unwrap();
    (engine, actors)
}

/// Remove the random first wave and park one motionless enemy in a corner,
/// so the wave spawner stays quiet.
fn quiet_arena(engine: &mut GameEngine, player: Entity) -> Entity {
    let enemies: Vec<Entity> = engine
        .world()
        .query::<&Enemy>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in enemies {
        engine.world_mut().despawn(entity).unwrap();
    }
    world_setup::spawn_enemy_at(
        engine.world_mut(),
        player,
        Vec2::new(790.0, 590.0),
        0.0,
        0.0,
    )
}

fn press(key: Key) -> InputEvent {
    InputEvent::KeyPress { key }
}

fn release(key: Key) -> InputEvent {
    InputEvent::KeyRelease { key }
}

fn count<T: hecs::Component>(world: &World) -> usize {
    world.query::<&T>().iter().count()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let config = SimConfig {
        seed: 12345,
        ..Default::default()
    };
    let (mut engine_a, _) = started_engine(config.clone());
    let (mut engine_b, _) = started_engine(config);

    for tick in 0..300 {
        let inputs = match tick % 40 {
            0 => vec![press(Key::W), press(Key::Space)],
            10 => vec![press(Key::A), press(Key::Left)],
            20 => vec![release(Key::A), release(Key::Left), press(Key::Space)],
            30 => vec![release(Key::W)],
            _ => Vec::new(),
        };
        engine_a.queue_inputs(inputs.clone());
        engine_b.queue_inputs(inputs);

        let json_a = serde_json::to_string(&engine_a.tick(DT)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(DT)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let (mut engine_a, _) = started_engine(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let (mut engine_b, _) = started_engine(SimConfig {
        seed: 222,
        ..Default::default()
    });

    let json_a = serde_json::to_string(&engine_a.tick(DT)).unwrap();
    let json_b = serde_json::to_string(&engine_b.tick(DT)).unwrap();
    assert_ne!(json_a, json_b, "first wave should be placed differently");
}

// ---- Lifecycle ----

#[test]
fn test_tick_before_setup_is_empty() {
    let mut engine = GameEngine::new(SimConfig::default());
    engine.queue_input(press(Key::W));

    let snap = engine.tick(DT);
    assert_eq!(snap.time.tick, 0);
    assert_eq!(snap.wave, 0);
    assert!(snap.enemies.is_empty());
    assert_eq!(snap.player.fuel, 0.0);
    assert!(engine.player_stats().is_none());
}

#[test]
fn test_setup_spawns_player_turret_and_first_wave() {
    let (engine, actors) = started_engine(SimConfig::default());

    assert_eq!(engine.wave(), 1);
    assert_eq!(engine.enemy_count(), ENEMY_BASE_COUNT as usize);

    let transform = *engine.world().get::<&Transform>(actors.player).unwrap();
    assert_eq!(
        transform.position,
        Vec2::new(PLAYER_START_X, PLAYER_START_Y)
    );
    assert_eq!(transform.angle, PLAYER_START_ANGLE);

    let stats = engine.player_stats().unwrap();
    assert_eq!(stats.fuel, FUEL_START);
    assert_eq!(stats.energy, MAX_ENERGY);
    assert_eq!(stats.coins, 0);
}

#[test]
fn test_setup_again_restarts() {
    let (mut engine, _) = started_engine(SimConfig::default());
    engine.queue_input(press(Key::W));
    for _ in 0..30 {
        engine.tick(DT);
    }

    engine.setup();
    let snap = engine.tick(0.0);
    assert_eq!(snap.wave, 1);
    assert_eq!(snap.time.tick, 1);
    assert_eq!(snap.player.position, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
    assert!(!engine.intents().tank_forward, "intents reset on setup");
}

#[test]
fn test_invalid_delta_time_treated_as_zero() {
    let (mut engine, _) = started_engine(SimConfig::default());
    engine.queue_input(press(Key::W));
    let snap = engine.tick(f32::NAN);
    assert_eq!(snap.time.elapsed_secs, 0.0);
    assert_eq!(snap.player.fuel, FUEL_START, "no drain at zero dt");
}

// ---- Input ----

#[test]
fn test_input_only_changes_intents_until_tick() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    engine.queue_input(press(Key::W));
    assert!(!engine.intents().tank_forward, "queued, not yet applied");

    engine.tick(DT);
    assert!(engine.intents().tank_forward);

    engine.queue_input(release(Key::W));
    engine.tick(DT);
    let before = engine.world().get::<&Transform>(actors.player).unwrap().position;
    engine.tick(DT);
    let after = engine.world().get::<&Transform>(actors.player).unwrap().position;
    assert_eq!(before, after, "released tank does not move");
}

#[test]
fn test_thrust_one_tick() {
    let (mut engine, _) = started_engine(SimConfig::default());
    engine.queue_input(press(Key::W));

    let snap = engine.tick(DT);
    assert!((snap.player.position.x - 400.0).abs() < 0.01);
    assert!(
        (snap.player.position.y - 55.0).abs() < 0.01,
        "expected ~55, got {}",
        snap.player.position.y
    );
    assert!((FUEL_START - snap.player.fuel - 1.0 / 60.0).abs() < 1e-3);
}

#[test]
fn test_turning_keys_rotate_tank() {
    let (mut engine, _) = started_engine(SimConfig::default());
    engine.queue_input(press(Key::A));
    let snap = engine.tick(DT);
    assert!((snap.player.angle - 93.0).abs() < 1e-4);

    engine.queue_inputs([release(Key::A), press(Key::D)]);
    engine.tick(DT);
    let snap = engine.tick(DT);
    assert!((snap.player.angle - 87.0).abs() < 1e-4);
}

#[test]
fn test_joystick_ignored_without_joystick() {
    let (mut engine, _) = started_engine(SimConfig::default());
    engine.queue_input(InputEvent::JoyAxisMotion {
        axis: JoyAxis::X,
        value: 1.0,
    });
    let snap = engine.tick(DT);
    assert_eq!(snap.player.angle, PLAYER_START_ANGLE);
}

#[test]
fn test_joystick_turns_tank_when_configured() {
    let (mut engine, _) = started_engine(SimConfig {
        controller: ControllerSetup::Joystick {
            name: "Test Pad".into(),
        },
        ..Default::default()
    });
    engine.queue_input(InputEvent::JoyAxisMotion {
        axis: JoyAxis::X,
        value: 1.0,
    });
    let snap = engine.tick(DT);
    assert!((snap.player.angle - 87.0).abs() < 1e-4);
}

#[test]
fn test_nan_joystick_axis_leaves_heading_intact() {
    let (mut engine, _) = started_engine(SimConfig {
        controller: ControllerSetup::Joystick {
            name: "Test Pad".into(),
        },
        ..Default::default()
    });
    engine.queue_inputs([
        InputEvent::JoyAxisMotion {
            axis: JoyAxis::X,
            value: f32::NAN,
        },
        press(Key::W),
    ]);

    let snap = engine.tick(DT);
    assert_eq!(snap.player.angle, PLAYER_START_ANGLE);
    assert!(snap.player.position.is_finite());

    let snap = engine.tick(DT);
    assert_eq!(snap.player.angle, PLAYER_START_ANGLE);
    assert!(snap.player.position.is_finite());
}

// ---- Player movement ----

#[test]
fn test_player_x_clamped_to_arena() {
    let (mut engine, actors) = started_engine(SimConfig::default());

    engine
        .world_mut()
        .get::<&mut Transform>(actors.player)
        .unwrap()
        .position
        .x = 5.0;
    let snap = engine.tick(DT);
    assert_eq!(snap.player.position.x, PLAYER_HALF_WIDTH);

    engine
        .world_mut()
        .get::<&mut Transform>(actors.player)
        .unwrap()
        .position
        .x = 795.0;
    let snap = engine.tick(DT);
    assert_eq!(snap.player.position.x, 800.0 - 1.0 - PLAYER_HALF_WIDTH);
}

#[test]
fn test_player_y_not_clamped() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    engine
        .world_mut()
        .get::<&mut Transform>(actors.player)
        .unwrap()
        .position
        .y = -50.0;
    let snap = engine.tick(DT);
    assert_eq!(snap.player.position.y, -50.0);
}

// ---- Turret ----

#[test]
fn test_turret_follows_host_with_relative_angle() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);

    engine.queue_input(press(Key::Left));
    let snap = engine.tick(DT);
    assert!((snap.turret.relative_angle - CANON_ROTATE_SPEED).abs() < 1e-4);

    let snap = engine.tick(DT);
    assert!((snap.turret.relative_angle - 2.0 * CANON_ROTATE_SPEED).abs() < 1e-4);
    // Position and heading are taken from the host before this tick's turn.
    assert!((snap.turret.angle - (PLAYER_START_ANGLE + CANON_ROTATE_SPEED)).abs() < 1e-4);
    assert_eq!(snap.turret.position, snap.player.position);

    engine.queue_inputs([release(Key::Left), press(Key::W)]);
    let snap = engine.tick(DT);
    assert_eq!(snap.turret.position, snap.player.position);
}

#[test]
fn test_hat_turns_turret() {
    let (mut engine, _) = started_engine(SimConfig::default());
    engine.queue_input(InputEvent::JoyHatMotion { x: 1, y: 0 });
    let snap = engine.tick(DT);
    assert!((snap.turret.relative_angle - (360.0 - CANON_ROTATE_SPEED)).abs() < 1e-3);
}

// ---- Shots and collisions ----

#[test]
fn test_fire_spawns_shot_along_turret() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    engine.queue_input(press(Key::Space));
    let snap = engine.tick(DT);

    assert_eq!(snap.shots.len(), 1);
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, GameEvent::ShotFired { .. })));
    let shot = &snap.shots[0];
    assert!((shot.position.x - PLAYER_START_X).abs() < 1e-3);
    assert!((shot.position.y - (PLAYER_START_Y + SHOT_SPEED)).abs() < 1e-3);
}

#[test]
fn test_holding_space_fires_once() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    engine.queue_input(press(Key::Space));
    engine.tick(DT);
    let snap = engine.tick(DT);
    assert_eq!(snap.shots.len(), 1);
}

#[test]
fn test_shot_destroys_enemy() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    let target = Vec2::new(PLAYER_START_X, 150.0);
    let enemy = world_setup::spawn_enemy_at(engine.world_mut(), actors.player, target, 0.0, 0.0);

    engine.queue_input(press(Key::Space));
    let mut hit = None;
    for _ in 0..40 {
        let snap = engine.tick(DT);
        if snap
            .events
            .iter()
            .any(|e| *e == GameEvent::EnemyDestroyed { position: target })
        {
            hit = Some(snap);
            break;
        }
    }

    let snap = hit.expect("shot never reached the enemy");
    assert!(!engine.world().contains(enemy));
    assert!(snap.shots.is_empty(), "shot consumed by the hit");
    assert_eq!(snap.explosions.len(), 1);
    assert_eq!(snap.explosions[0].position, target);
    assert_eq!(snap.player.coins, ENEMY_KILL_COINS);
}

#[test]
fn test_one_shot_kills_one_enemy() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    let spot = Vec2::new(PLAYER_START_X, 150.0);
    world_setup::spawn_enemy_at(engine.world_mut(), actors.player, spot, 0.0, 0.0);
    world_setup::spawn_enemy_at(engine.world_mut(), actors.player, spot, 0.0, 0.0);

    engine.queue_input(press(Key::Space));
    let mut destroyed = 0;
    for _ in 0..40 {
        let snap = engine.tick(DT);
        destroyed += snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyDestroyed { .. }))
            .count();
    }
    assert_eq!(destroyed, 1);
    assert_eq!(engine.player_stats().unwrap().coins, ENEMY_KILL_COINS);
}

#[test]
fn test_shots_culled_offscreen() {
    let mut world = World::new();
    let arena = Arena::new(800.0, 600.0);
    let kept = world_setup::spawn_shot(&mut world, Vec2::new(400.0, 610.0), 90.0);
    let culled = world_setup::spawn_shot(&mut world, Vec2::new(400.0, 617.0), 90.0);

    let mut despawn = Vec::new();
    movement::move_shots(&mut world, arena, &mut despawn);
    assert_eq!(despawn, vec![culled]);
    assert!(world.contains(kept));
    assert_eq!(count::<Shot>(&world), 2, "removal waits for the flush");
}

// ---- Pickups ----

#[test]
fn test_coin_pickup() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    let start = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
    world_setup::spawn_pickup_at(engine.world_mut(), PickupKind::Coin, start);

    let snap = engine.tick(DT);
    assert_eq!(snap.player.coins, COIN_VALUE);
    assert!(snap.pickups.is_empty());
    assert!(snap
        .events
        .contains(&GameEvent::CoinCollected { coins: COIN_VALUE }));
}

#[test]
fn test_fuel_pickup_refilled_then_clamped() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    engine
        .world_mut()
        .get::<&mut PlayerStats>(actors.player)
        .unwrap()
        .fuel = 50.0;
    let start = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
    world_setup::spawn_pickup_at(engine.world_mut(), PickupKind::Fuel, start);

    let snap = engine.tick(DT);
    assert_eq!(snap.player.fuel, 50.0 + FUEL_VALUE);

    world_setup::spawn_pickup_at(engine.world_mut(), PickupKind::Fuel, start);
    world_setup::spawn_pickup_at(engine.world_mut(), PickupKind::Fuel, start);
    engine.tick(DT);
    let snap = engine.tick(DT);
    assert_eq!(snap.player.fuel, FUEL_MAX, "overflow clamped on the next tick");
}

#[test]
fn test_pickup_far_from_player_stays() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    world_setup::spawn_pickup_at(engine.world_mut(), PickupKind::Coin, Vec2::new(100.0, 400.0));
    let snap = engine.tick(DT);
    assert_eq!(snap.pickups.len(), 1);
    assert_eq!(snap.player.coins, 0);
}

#[test]
fn test_pickup_timers() {
    let config = SimConfig::default();
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut timers = pickup_spawner::SpawnTimers::new(&config);
    let coins = |world: &World| {
        world
            .query::<&Pickup>()
            .iter()
            .filter(|(_, p)| p.kind == PickupKind::Coin)
            .count()
    };

    pickup_spawner::run(&mut world, &mut rng, &mut timers, &config, 2.5);
    assert_eq!(count::<Pickup>(&world), 0);

    pickup_spawner::run(&mut world, &mut rng, &mut timers, &config, 0.5);
    assert_eq!(coins(&world), 1);
    assert_eq!(count::<Pickup>(&world), 1);
    assert_eq!(timers.coin, COIN_SPAWN_INTERVAL, "timer resets to full interval");
    assert_eq!(timers.fuel, 2.0);

    pickup_spawner::run(&mut world, &mut rng, &mut timers, &config, 2.0);
    assert_eq!(coins(&world), 1);
    assert_eq!(count::<Pickup>(&world), 2, "fuel spawned");

    let arena = config.arena();
    for (_, (_, t)) in world.query::<(&Pickup, &Transform)>().iter() {
        assert!(arena.contains(t.position));
    }
}

// ---- Resources ----

#[test]
fn test_fuel_clamped_to_bounds() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);

    engine
        .world_mut()
        .get::<&mut PlayerStats>(actors.player)
        .unwrap()
        .fuel = 10.0;
    assert_eq!(engine.tick(DT).player.fuel, FUEL_MIN);

    engine
        .world_mut()
        .get::<&mut PlayerStats>(actors.player)
        .unwrap()
        .fuel = 180.0;
    assert_eq!(engine.tick(DT).player.fuel, FUEL_MAX);
}

#[test]
fn test_fuel_never_drains_below_floor() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    engine
        .world_mut()
        .get::<&mut PlayerStats>(actors.player)
        .unwrap()
        .fuel = FUEL_MIN;

    engine.queue_input(press(Key::W));
    for _ in 0..20 {
        let snap = engine.tick(DT);
        assert!(snap.player.fuel >= FUEL_MIN);
    }
}

#[test]
fn test_turret_contact_drains_energy() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    let start = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
    world_setup::spawn_enemy_at(engine.world_mut(), actors.player, start, 0.0, 0.0);

    let snap = engine.tick(DT);
    assert_eq!(snap.player.energy, MAX_ENERGY - TURRET_CONTACT_DAMAGE);
    assert!(snap.events.contains(&GameEvent::PlayerHit {
        energy: MAX_ENERGY - TURRET_CONTACT_DAMAGE
    }));

    let snap = engine.tick(DT);
    assert_eq!(
        snap.player.energy,
        MAX_ENERGY - 2.0 * TURRET_CONTACT_DAMAGE,
        "contact drains every tick"
    );
}

#[test]
fn test_each_touching_enemy_drains_energy() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    let start = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
    world_setup::spawn_enemy_at(engine.world_mut(), actors.player, start, 0.0, 0.0);
    world_setup::spawn_enemy_at(engine.world_mut(), actors.player, start, 0.0, 0.0);

    let snap = engine.tick(DT);
    assert_eq!(snap.player.energy, MAX_ENERGY - 2.0 * TURRET_CONTACT_DAMAGE);
    let hits = snap
        .events
        .iter()
        .filter(|e| matches!(e, GameEvent::PlayerHit { .. }))
        .count();
    assert_eq!(hits, 2, "one hit per touching enemy");

    let snap = engine.tick(DT);
    assert_eq!(snap.player.energy, MAX_ENERGY - 4.0 * TURRET_CONTACT_DAMAGE);
}

#[test]
fn test_collision_result_counts_every_pass() {
    let mut world = World::new();
    let actors = world_setup::setup_arena(&mut world, &SimConfig::default());
    let start = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
    let target = Vec2::new(PLAYER_START_X, 150.0);

    world_setup::spawn_enemy_at(&mut world, actors.player, start, 0.0, 0.0);
    world_setup::spawn_enemy_at(&mut world, actors.player, start, 0.0, 0.0);
    let shot_down = world_setup::spawn_enemy_at(&mut world, actors.player, target, 0.0, 0.0);
    let shot = world_setup::spawn_shot(&mut world, target, 90.0);
    world_setup::spawn_pickup_at(&mut world, PickupKind::Coin, start);
    world_setup::spawn_pickup_at(&mut world, PickupKind::Fuel, start);

    let mut events = Vec::new();
    let mut despawn = Vec::new();
    let result = collision::run(&mut world, actors, &mut events, &mut despawn);

    assert_eq!(
        result,
        CollisionResult {
            enemies_destroyed: 1,
            coins_collected: 1,
            fuel_collected: 1,
            turret_contacts: 2,
        }
    );
    assert!(!world.contains(shot) && !world.contains(shot_down));
    assert_eq!(count::<Pickup>(&world), 0);
    assert_eq!(count::<Enemy>(&world), 2, "contact does not remove enemies");
    assert!(despawn.is_empty(), "buffer flushed");

    let stats = *world.get::<&PlayerStats>(actors.player).unwrap();
    assert_eq!(stats.coins, ENEMY_KILL_COINS + COIN_VALUE);
    assert_eq!(stats.fuel, FUEL_START + FUEL_VALUE, "clamped later in the tick");
    assert_eq!(stats.energy, MAX_ENERGY - 2.0 * TURRET_CONTACT_DAMAGE);

    let quiet = collision::run(&mut world, actors, &mut events, &mut despawn);
    assert_eq!(quiet.turret_contacts, 2);
    assert_eq!(quiet.enemies_destroyed + quiet.coins_collected + quiet.fuel_collected, 0);
}

#[test]
fn test_energy_clamped_at_zero() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    let start = Vec2::new(PLAYER_START_X, PLAYER_START_Y);
    world_setup::spawn_enemy_at(engine.world_mut(), actors.player, start, 0.0, 0.0);
    engine
        .world_mut()
        .get::<&mut PlayerStats>(actors.player)
        .unwrap()
        .energy = 0.5;

    let snap = engine.tick(DT);
    assert_eq!(snap.player.energy, 0.0);
    assert_eq!(snap.life_bar.fraction, 0.0);
    assert_eq!(snap.life_bar.filled_width, 0.0);
}

#[test]
fn test_life_bar_tracks_energy() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    quiet_arena(&mut engine, actors.player);
    engine
        .world_mut()
        .get::<&mut PlayerStats>(actors.player)
        .unwrap()
        .energy = 50.0;

    let snap = engine.tick(DT);
    assert_eq!(snap.life_bar.fraction, 0.5);
    assert_eq!(snap.life_bar.filled_width, LIFE_BAR_WIDTH / 2.0);
    assert_eq!(snap.life_bar.full_width, LIFE_BAR_WIDTH);
    assert_eq!(
        snap.life_bar.center,
        snap.player.position + Vec2::new(0.0, LIFE_BAR_OFFSET_Y)
    );
}

// ---- Waves and enemies ----

#[test]
fn test_start_new_wave() {
    let config = SimConfig::default();
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let player = world_setup::spawn_player(&mut world, MAX_ENERGY);

    let next = wave_spawner::start_new_wave(&mut world, &mut rng, player, 2, &config);
    assert_eq!(next, 3);
    assert_eq!(count::<Enemy>(&world), (ENEMY_BASE_COUNT + 2) as usize);

    let arena = config.arena();
    for (_, (enemy, t)) in world.query::<(&Enemy, &Transform)>().iter() {
        assert_eq!(enemy.target, player);
        assert!(arena.contains(t.position));
    }
}

#[test]
fn test_wave_spawner_reports_when_it_starts_a_wave() {
    let config = SimConfig::default();
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let player = world_setup::spawn_player(&mut world, MAX_ENERGY);
    let mut wave = 0;
    let mut events = Vec::new();

    assert!(wave_spawner::run(&mut world, &mut rng, player, &mut wave, &config, &mut events));
    assert_eq!(wave, 1);
    assert_eq!(count::<Enemy>(&world), ENEMY_BASE_COUNT as usize);

    assert!(!wave_spawner::run(&mut world, &mut rng, player, &mut wave, &config, &mut events));
    assert_eq!(wave, 1, "no wave while enemies remain");
    assert_eq!(events.len(), 1);
}

#[test]
fn test_cleared_arena_starts_next_wave() {
    let (mut engine, actors) = started_engine(SimConfig::default());
    let guard = quiet_arena(&mut engine, actors.player);
    engine.world_mut().despawn(guard).unwrap();

    let snap = engine.tick(DT);
    assert_eq!(snap.wave, 2);
    assert_eq!(snap.enemies.len(), (ENEMY_BASE_COUNT + 1) as usize);
    assert!(snap.events.contains(&GameEvent::WaveStarted {
        wave: 2,
        enemies: ENEMY_BASE_COUNT + 1,
    }));

    let snap = engine.tick(DT);
    assert_eq!(snap.wave, 2, "no new wave while enemies remain");
}

#[test]
fn test_enemy_pursues_target() {
    let mut world = World::new();
    let player = world_setup::spawn_player(&mut world, MAX_ENERGY);
    let enemy =
        world_setup::spawn_enemy_at(&mut world, player, Vec2::new(100.0, 50.0), 45.0, 60.0);

    let mut despawn = Vec::new();
    movement::pursue(&mut world, Arena::new(800.0, 600.0), 0.5, &mut despawn);

    let t = *world.get::<&Transform>(enemy).unwrap();
    assert!(t.angle.abs() < 1e-3, "faces the player, got {}", t.angle);
    assert!((t.position.x - 130.0).abs() < 1e-3);
    assert!((t.position.y - 50.0).abs() < 1e-3);
    assert!(despawn.is_empty());
}

#[test]
fn test_enemy_outside_arena_removed() {
    let mut world = World::new();
    let player = world_setup::spawn_player(&mut world, MAX_ENERGY);
    let inside =
        world_setup::spawn_enemy_at(&mut world, player, Vec2::new(300.0, 300.0), 0.0, 60.0);
    let outside =
        world_setup::spawn_enemy_at(&mut world, player, Vec2::new(400.0, -100.0), 0.0, 60.0);

    let mut despawn = Vec::new();
    movement::pursue(&mut world, Arena::new(800.0, 600.0), DT, &mut despawn);
    assert_eq!(despawn, vec![outside]);

    crate::systems::cleanup::flush(&mut world, &mut despawn);
    assert!(!world.contains(outside));
    assert!(world.contains(inside));
    assert!(despawn.is_empty());
}

// ---- Effects ----

#[test]
fn test_tire_track_alpha() {
    assert_eq!(tire_tracks::alpha_at(0.0, 2.0), TIRE_TRACK_MAX_ALPHA);
    assert_eq!(tire_tracks::alpha_at(1.0, 2.0), TIRE_TRACK_MAX_ALPHA);
    assert_eq!(tire_tracks::alpha_at(1.5, 2.0), TIRE_TRACK_MAX_ALPHA / 2.0);
    assert_eq!(tire_tracks::alpha_at(2.0, 2.0), 0.0);
    assert_eq!(tire_tracks::alpha_at(3.0, 2.0), 0.0);
}

#[test]
fn test_tire_track_fades_and_is_removed() {
    let mut world = World::new();
    let track = world_setup::spawn_tire_track(&mut world, Transform::new(10.0, 10.0, 0.0));
    let mut despawn = Vec::new();

    tire_tracks::fade(&mut world, 1.5, &mut despawn);
    assert!(despawn.is_empty());
    assert_eq!(
        world.get::<&TireTrack>(track).unwrap().alpha,
        TIRE_TRACK_MAX_ALPHA / 2.0
    );

    tire_tracks::fade(&mut world, 0.5, &mut despawn);
    assert_eq!(despawn, vec![track]);
}

#[test]
fn test_only_thrusting_tank_leaves_tracks() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let player = world_setup::spawn_player(&mut world, MAX_ENERGY);

    for _ in 0..100 {
        assert!(!tire_tracks::emit(&mut world, &mut rng, player, false));
    }
    assert_eq!(count::<TireTrack>(&world), 0);

    let emitted = (0..500)
        .filter(|_| tire_tracks::emit(&mut world, &mut rng, player, true))
        .count();
    assert!(emitted > 50 && emitted < 150, "about one in five, got {emitted}");
    assert_eq!(count::<TireTrack>(&world), emitted);
}

#[test]
fn test_explosion_expires() {
    let (mut engine, _) = started_engine(SimConfig::default());
    world_setup::spawn_explosion(engine.world_mut(), Vec2::new(200.0, 200.0));

    let snap = engine.tick(DT);
    assert_eq!(snap.explosions.len(), 1);
    assert!(snap.explosions[0].scale > EXPLOSION_START_SCALE);

    for _ in 0..40 {
        engine.tick(DT);
    }
    assert!(engine.tick(DT).explosions.is_empty());
}

// ---- Config ----

#[test]
fn test_default_config_is_valid() {
    assert_eq!(SimConfig::default().validate(), Ok(()));
}

#[test]
fn test_config_validation_rejects_bad_values() {
    let narrow = SimConfig {
        arena_width: 10.0,
        ..Default::default()
    };
    assert!(narrow.validate().unwrap_err().contains("arena_width"));

    let stalled = SimConfig {
        coin_spawn_interval: 0.0,
        ..Default::default()
    };
    assert!(stalled.validate().unwrap_err().contains("coin_spawn_interval"));

    let nan = SimConfig {
        max_energy: f32::NAN,
        ..Default::default()
    };
    assert!(nan.validate().is_err());

    let runaway = SimConfig {
        enemy_speed: f32::INFINITY,
        ..Default::default()
    };
    assert!(runaway.validate().unwrap_err().contains("enemy_speed"));

    let horde = SimConfig {
        enemy_base_count: u32::MAX,
        ..Default::default()
    };
    assert!(horde.validate().unwrap_err().contains("enemy_base_count"));

    let limit = SimConfig {
        enemy_base_count: ENEMY_BASE_COUNT_LIMIT,
        ..Default::default()
    };
    assert_eq!(limit.validate(), Ok(()));

    // 1e39 overflows f32 and parses as infinity.
    let err = SimConfig::from_json(r#"{"arena_width": 1e39}"#).unwrap_err();
    assert!(err.contains("arena_width"), "got {err}");
    assert!(SimConfig::from_json(r#"{"arena_height": 1e39}"#).is_err());
    assert!(SimConfig::from_json(r#"{"coin_spawn_interval": 1e39}"#).is_err());
    assert!(SimConfig::from_json(r#"{"max_energy": 1e39}"#).is_err());
}

#[test]
fn test_config_from_json() {
    let config = SimConfig::from_json(r#"{"seed": 7, "enemy_base_count": 5}"#).unwrap();
    assert_eq!(config.seed, 7);
    assert_eq!(config.enemy_base_count, 5);
    assert_eq!(config.arena_width, SCREEN_WIDTH);

    let joystick =
        SimConfig::from_json(r#"{"controller": {"type": "Joystick", "name": "Pad"}}"#).unwrap();
    assert!(joystick.controller.has_joystick());

    assert!(SimConfig::from_json("not json")
        .unwrap_err()
        .starts_with("invalid config"));
    assert!(SimConfig::from_json(r#"{"fuel_spawn_interval": -1}"#).is_err());
}

#[test]
fn test_snapshot_json_round_trip() {
    let (mut engine, _) = started_engine(SimConfig::default());
    engine.queue_inputs([press(Key::W), press(Key::Space)]);
    let snap = engine.tick(DT);

    let json = serde_json::to_string(&snap).unwrap();
    let back: tankwar_core::state::GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string(&back).unwrap(), json);
}
