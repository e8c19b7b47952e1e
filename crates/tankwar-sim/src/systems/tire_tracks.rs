//! Tire-track decals: emitted behind a thrusting tank, faded out over time.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tankwar_core::components::TireTrack;
use tankwar_core::constants::{TIRE_TRACK_CHANCE_DENOMINATOR, TIRE_TRACK_MAX_ALPHA};
use tankwar_core::types::Transform;

use crate::world_setup;

/// Roll for a new decal under the tank. Only thrusting tanks leave tracks,
/// on average one tick in `TIRE_TRACK_CHANCE_DENOMINATOR`.
/// Returns whether a decal was emitted.
pub fn emit(world: &mut World, rng: &mut ChaCha8Rng, tank: Entity, thrusting: bool) -> bool {
    if !thrusting {
        return false;
    }
    if !rng.gen_ratio(1, TIRE_TRACK_CHANCE_DENOMINATOR) {
        return false;
    }
    let Ok(transform) = world.get::<&Transform>(tank).map(|t| *t) else {
        return false;
    };
    world_setup::spawn_tire_track(world, transform);
    true
}

/// Age every decal by `dt`, update its alpha and queue faded-out ones for removal.
pub fn fade(world: &mut World, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    for (entity, track) in world.query_mut::<&mut TireTrack>() {
        track.age_secs += dt;
        track.alpha = alpha_at(track.age_secs, track.lifetime_secs);
        if track.alpha <= 0.0 {
            despawn_buffer.push(entity);
        }
    }
}

/// Opacity of a decal of the given age: full for the first half of its
/// lifetime, then linear down to zero at the end.
pub fn alpha_at(age_secs: f32, lifetime_secs: f32) -> f32 {
    let half = lifetime_secs / 2.0;
    if age_secs <= half {
        return TIRE_TRACK_MAX_ALPHA;
    }
    if half <= 0.0 {
        return 0.0;
    }
    (TIRE_TRACK_MAX_ALPHA * (lifetime_secs - age_secs) / half).max(0.0)
}
