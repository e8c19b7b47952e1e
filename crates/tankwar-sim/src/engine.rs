//! Game engine: the frame orchestrator.
//!
//! `GameEngine` owns the hecs ECS world, applies queued input, runs all
//! systems in a fixed order and produces `GameStateSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use tankwar_core::components::{Enemy, PlayerStats};
use tankwar_core::constants::*;
use tankwar_core::enums::ControllerSetup;
use tankwar_core::events::GameEvent;
use tankwar_core::input::InputEvent;
use tankwar_core::state::GameStateSnapshot;
use tankwar_core::types::{Arena, SimTime, Transform};

use crate::intents::{FireRequest, Intents};
use crate::systems;
use crate::systems::pickup_spawner::SpawnTimers;
use crate::world_setup::{self, Actors};

/// Configuration for starting a new game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same game.
    pub seed: u64,
    pub arena_width: f32,
    pub arena_height: f32,
    /// Enemies in wave 0; wave n spawns `enemy_base_count + n`.
    pub enemy_base_count: u32,
    /// Enemy pursuit speed (units per second).
    pub enemy_speed: f32,
    /// Seconds between coin spawns.
    pub coin_spawn_interval: f32,
    /// Seconds between fuel spawns.
    pub fuel_spawn_interval: f32,
    pub max_energy: f32,
    pub controller: ControllerSetup,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena_width: SCREEN_WIDTH,
            arena_height: SCREEN_HEIGHT,
            enemy_base_count: ENEMY_BASE_COUNT,
            enemy_speed: ENEMY_SPEED,
            coin_spawn_interval: COIN_SPAWN_INTERVAL,
            fuel_spawn_interval: FUEL_SPAWN_INTERVAL,
            max_energy: MAX_ENERGY,
            controller: ControllerSetup::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| format!("invalid config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is usable. Returns the first problem found.
    /// NaN and infinite values fail every check.
    pub fn validate(&self) -> Result<(), String> {
        let min_width = 2.0 * PLAYER_HALF_WIDTH + 1.0;
        require(self.arena_width.is_finite() && self.arena_width >= min_width, || {
            format!(
                "arena_width must be finite and at least {min_width}, got {}",
                self.arena_width
            )
        })?;
        require(self.arena_height.is_finite() && self.arena_height >= 1.0, || {
            format!(
                "arena_height must be finite and at least 1, got {}",
                self.arena_height
            )
        })?;
        require(self.enemy_base_count <= ENEMY_BASE_COUNT_LIMIT, || {
            format!(
                "enemy_base_count must be at most {ENEMY_BASE_COUNT_LIMIT}, got {}",
                self.enemy_base_count
            )
        })?;
        require(self.enemy_speed.is_finite() && self.enemy_speed >= 0.0, || {
            format!(
                "enemy_speed must be finite and not negative, got {}",
                self.enemy_speed
            )
        })?;
        require(positive(self.coin_spawn_interval), || {
            format!(
                "coin_spawn_interval must be finite and positive, got {}",
                self.coin_spawn_interval
            )
        })?;
        require(positive(self.fuel_spawn_interval), || {
            format!(
                "fuel_spawn_interval must be finite and positive, got {}",
                self.fuel_spawn_interval
            )
        })?;
        require(positive(self.max_energy), || {
            format!(
                "max_energy must be finite and positive, got {}",
                self.max_energy
            )
        })
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn require(ok: bool, message: impl FnOnce() -> String) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(message())
    }
}

/// The game engine. Owns the ECS world and all game state.
pub struct GameEngine {
    world: World,
    config: SimConfig,
    time: SimTime,
    rng: ChaCha8Rng,
    intents: Intents,
    input_queue: VecDeque<InputEvent>,
    /// `None` until `setup` has run.
    actors: Option<Actors>,
    timers: SpawnTimers,
    wave: u32,
    events: Vec<GameEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl GameEngine {
    /// Create an engine with an empty arena. Call `setup` before ticking.
    pub fn new(config: SimConfig) -> Self {
        match &config.controller {
            ControllerSetup::Joystick { name } => info!(joystick = %name, "found joystick"),
            ControllerSetup::KeyboardOnly => info!("no joysticks found, keyboard only"),
        }

        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            intents: Intents::default(),
            input_queue: VecDeque::new(),
            actors: None,
            timers: SpawnTimers::new(&config),
            wave: 0,
            events: Vec::new(),
            despawn_buffer: Vec::new(),
            config,
        }
    }

    /// Reset the arena: player, turret, timers, wave counter and the first wave.
    /// Calling it again restarts the game; the RNG stream continues.
    pub fn setup(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.intents = Intents::default();
        self.timers = SpawnTimers::new(&self.config);
        self.events.clear();

        let actors = world_setup::setup_arena(&mut self.world, &self.config);
        self.actors = Some(actors);

        self.wave = 0;
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            actors.player,
            &mut self.wave,
            &self.config,
            &mut self.events,
        );

        info!(
            width = self.config.arena_width,
            height = self.config.arena_height,
            "arena ready"
        );
    }

    /// Queue an input event for processing at the next tick boundary.
    pub fn queue_input(&mut self, event: InputEvent) {
        self.input_queue.push_back(event);
    }

    /// Queue multiple input events.
    pub fn queue_inputs(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.input_queue.extend(events);
    }

    /// Advance the game by one frame of `delta_time` seconds and return the
    /// resulting snapshot.
    pub fn tick(&mut self, delta_time: f32) -> GameStateSnapshot {
        let dt = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };

        match self.actors {
            Some(actors) => {
                self.process_inputs(actors);
                self.run_systems(actors, dt);
                self.time.advance(dt);
            }
            None => warn!("tick before setup, nothing to simulate"),
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.wave, self.actors, events)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Number of waves started so far.
    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn intents(&self) -> &Intents {
        &self.intents
    }

    pub fn actors(&self) -> Option<Actors> {
        self.actors
    }

    /// Current player resources, if the arena is set up.
    pub fn player_stats(&self) -> Option<PlayerStats> {
        let actors = self.actors?;
        self.world
            .get::<&PlayerStats>(actors.player)
            .ok()
            .map(|stats| *stats)
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for scripted scenarios and tests.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Apply all queued input to the intent state.
    fn process_inputs(&mut self, actors: Actors) {
        while let Some(event) = self.input_queue.pop_front() {
            if let Some(FireRequest) = self.intents.apply(&event) {
                self.fire(actors);
            }
        }
    }

    /// Spawn a shot at the player's position along the turret's heading.
    fn fire(&mut self, actors: Actors) {
        let Ok(position) = self
            .world
            .get::<&Transform>(actors.player)
            .map(|t| t.position)
        else {
            return;
        };
        let angle = self
            .world
            .get::<&Transform>(actors.turret)
            .map(|t| t.angle)
            .unwrap_or(PLAYER_START_ANGLE);

        world_setup::spawn_shot(&mut self.world, position, angle);
        self.events.push(GameEvent::ShotFired { position, angle });
        debug!(x = position.x, y = position.y, angle, "shot fired");
    }

    /// Run all systems in order.
    fn run_systems(&mut self, actors: Actors, dt: f32) {
        let arena = self.config.arena();
        let thrusting = self.intents.thrusting();

        // 1. Pickup timers
        systems::pickup_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.timers,
            &self.config,
            dt,
        );
        // 2. Fuel burn + clamp
        systems::resources::drain_fuel(&mut self.world, actors.player, thrusting, dt);
        systems::resources::clamp_fuel(&mut self.world, actors.player);
        // 3. Tire tracks
        systems::tire_tracks::emit(&mut self.world, &mut self.rng, actors.player, thrusting);
        // 4. Keyboard steering
        systems::player_control::steer(&mut self.world, actors.player, &self.intents);
        // 5. Joystick steering
        if self.config.controller.has_joystick() {
            systems::player_control::apply_joystick(&mut self.world, actors.player, &self.intents);
        }
        // 6. Integrate every entity set
        systems::movement::move_player(&mut self.world, actors.player, arena);
        systems::tire_tracks::fade(&mut self.world, dt, &mut self.despawn_buffer);
        systems::movement::move_shots(&mut self.world, arena, &mut self.despawn_buffer);
        systems::explosions::run(&mut self.world, dt, &mut self.despawn_buffer);
        systems::movement::pursue(&mut self.world, arena, dt, &mut self.despawn_buffer);
        systems::movement::follow_targets(&mut self.world);
        systems::cleanup::flush(&mut self.world, &mut self.despawn_buffer);
        // 7. Turret rotation
        systems::player_control::turn_turret(&mut self.world, actors.turret, &self.intents);
        // 8. Collisions, then energy clamp
        let hits = systems::collision::run(
            &mut self.world,
            actors,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        if hits != systems::collision::CollisionResult::default() {
            debug!(
                enemies = hits.enemies_destroyed,
                coins = hits.coins_collected,
                fuel = hits.fuel_collected,
                turret_contacts = hits.turret_contacts,
                "collisions resolved"
            );
        }
        systems::resources::clamp_energy(&mut self.world, actors.player);
        // 9. Next wave once the arena is clear
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            actors.player,
            &mut self.wave,
            &self.config,
            &mut self.events,
        );

        trace!(
            tick = self.time.tick,
            entities = self.world.len(),
            "tick complete"
        );
    }
}
