//! Explosion effects: grow, count down, disappear.

use hecs::{Entity, World};

use tankwar_core::components::Explosion;
use tankwar_core::constants::EXPLOSION_GROWTH_RATE;

pub fn run(world: &mut World, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    for (entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.remaining_secs -= dt;
        explosion.scale += EXPLOSION_GROWTH_RATE * dt;
        if explosion.remaining_secs <= 0.0 {
            despawn_buffer.push(entity);
        }
    }
}
