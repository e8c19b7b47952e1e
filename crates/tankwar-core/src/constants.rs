//! Game constants and tuning parameters.
//!
//! Per-tick quantities (player speed, turn rates, shot speed) are applied once
//! per frame regardless of delta time. Per-second quantities (enemy speed,
//! timers, lifetimes) are scaled by delta time.

/// Nominal frame rate of the game loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal frame rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Arena ---

pub const SCREEN_WIDTH: f32 = 800.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Background colour identifier handed to the renderer.
pub const BACKGROUND_COLOR: &str = "amazon";

/// Scale applied to every sprite (hitboxes below are already scaled).
pub const SPRITE_SCALING: f32 = 0.5;

// --- Player ---

pub const PLAYER_START_X: f32 = SCREEN_WIDTH / 2.0;
pub const PLAYER_START_Y: f32 = 50.0;

/// Initial heading: facing up the screen.
pub const PLAYER_START_ANGLE: f32 = 90.0;

/// Forward/backward displacement per tick at full fuel-speed factor.
pub const PLAYER_SPEED: f32 = 5.0;

/// Heading change per tick while a turn key is held (degrees).
pub const PLAYER_TURN_SPEED: f32 = 3.0;

/// Speed multiplier per unit of fuel (100 fuel = 1.0).
pub const FUEL_SPEED_FACTOR: f32 = 0.01;

/// Fuel burnt per second of thrust is `fuel / FUEL_DRAIN_DIVISOR`.
pub const FUEL_DRAIN_DIVISOR: f32 = 100.0;

pub const FUEL_START: f32 = 100.0;
pub const FUEL_MIN: f32 = 40.0;
pub const FUEL_MAX: f32 = 100.0;

pub const MAX_ENERGY: f32 = 100.0;

pub const PLAYER_HALF_WIDTH: f32 = 20.0;
pub const PLAYER_HALF_HEIGHT: f32 = 20.0;

// --- Turret ---

/// Relative-angle change per tick while a canon-turn key is held (degrees).
pub const CANON_ROTATE_SPEED: f32 = 3.0;

pub const TURRET_HALF_WIDTH: f32 = 8.0;
pub const TURRET_HALF_HEIGHT: f32 = 8.0;

/// Energy lost per overlapping enemy per tick.
pub const TURRET_CONTACT_DAMAGE: f32 = 1.0;

// --- Shots ---

/// Shot displacement per tick.
pub const SHOT_SPEED: f32 = 4.0;

pub const SHOT_HALF_EXTENT: f32 = 4.0;

/// Shots further than this outside the arena are removed.
pub const SHOT_CULL_MARGIN: f32 = 20.0;

// --- Enemies ---

/// Enemies in wave 0; each later wave adds one more.
pub const ENEMY_BASE_COUNT: u32 = 3;

/// Upper bound accepted for a configured base enemy count.
pub const ENEMY_BASE_COUNT_LIMIT: u32 = 1_000;

/// Pursuit speed in units per second.
pub const ENEMY_SPEED: f32 = 60.0;

pub const ENEMY_HALF_EXTENT: f32 = 12.0;

/// Coins granted per enemy destroyed by a shot.
pub const ENEMY_KILL_COINS: u32 = 1;

// --- Pickups ---

/// Seconds between coin spawns.
pub const COIN_SPAWN_INTERVAL: f32 = 3.0;

/// Seconds between fuel spawns.
pub const FUEL_SPAWN_INTERVAL: f32 = 5.0;

pub const COIN_VALUE: u32 = 10;
pub const FUEL_VALUE: f32 = 25.0;

pub const PICKUP_HALF_EXTENT: f32 = 10.0;

// --- Effects ---

pub const EXPLOSION_LIFETIME: f32 = 0.6;
pub const EXPLOSION_START_SCALE: f32 = 0.3;

/// Scale gained per second while the explosion is alive.
pub const EXPLOSION_GROWTH_RATE: f32 = 1.5;

pub const TIRE_TRACK_LIFETIME: f32 = 2.0;

/// A thrusting tank leaves a track on 1 tick out of this many, on average.
pub const TIRE_TRACK_CHANCE_DENOMINATOR: u32 = 5;

pub const TIRE_TRACK_MAX_ALPHA: f32 = 255.0;

// --- Life bar ---

pub const LIFE_BAR_WIDTH: f32 = 50.0;
pub const LIFE_BAR_HEIGHT: f32 = 5.0;

/// Vertical offset of the life bar above the player's center.
pub const LIFE_BAR_OFFSET_Y: f32 = 30.0;
