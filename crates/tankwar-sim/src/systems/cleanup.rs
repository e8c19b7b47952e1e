//! Cleanup: removes killed entities from the world.

use hecs::{Entity, World};

/// Despawn every entity collected in `despawn_buffer`, each exactly once.
/// The buffer is pre-allocated by the engine to avoid per-tick allocation
/// and is left empty.
pub fn flush(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.sort_unstable();
    despawn_buffer.dedup();

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
