//! Movement systems: integrate every moving entity set for one tick.
//!
//! The player and shots move a fixed amount per tick; enemies move in units
//! per second and are scaled by delta time.

use hecs::{Entity, World};

use tankwar_core::components::{Enemy, Motion, PlayerTank, Shot, Turret};
use tankwar_core::constants::SHOT_CULL_MARGIN;
use tankwar_core::types::{wrap_degrees, Arena, Hitbox, Transform};

use crate::steering;

/// Apply the tank's pending motion, reset it, and keep the tank inside the
/// arena horizontally. There is no vertical clamp.
pub fn move_player(world: &mut World, tank: Entity, arena: Arena) {
    let Ok((_tank, transform, motion, hitbox)) =
        world.query_one_mut::<(&PlayerTank, &mut Transform, &mut Motion, &Hitbox)>(tank)
    else {
        return;
    };

    transform.position += motion.change;
    motion.change = glam::Vec2::ZERO;
    transform.position.x =
        steering::clamp_x_to_arena(transform.position.x, hitbox.half_width, arena.width);
}

/// Advance every shot along its fixed velocity. Shots that leave the arena
/// (plus a margin) are queued for removal.
pub fn move_shots(world: &mut World, arena: Arena, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (shot, transform)) in world.query_mut::<(&Shot, &mut Transform)>() {
        transform.position += shot.velocity;
        if !arena.contains_with_margin(transform.position, SHOT_CULL_MARGIN) {
            despawn_buffer.push(entity);
        }
    }
}

/// Pursuit steering: each enemy turns to face its target and moves toward it
/// at `speed * dt`. Enemies that end up outside the arena are queued for removal.
pub fn pursue(world: &mut World, arena: Arena, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    let chasers: Vec<(Entity, Entity, f32)> = world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, enemy)| (entity, enemy.target, enemy.speed))
        .collect();

    for (entity, target, speed) in chasers {
        let target_pos = match world.get::<&Transform>(target) {
            Ok(t) => t.position,
            // Target gone: hold position.
            Err(_) => continue,
        };

        let Ok(mut transform) = world.get::<&mut Transform>(entity) else {
            continue;
        };
        transform.angle = steering::heading_to(transform.position, target_pos);
        let velocity = steering::forward(transform.angle, speed);
        transform.position += velocity * dt;

        if !arena.contains(transform.position) {
            despawn_buffer.push(entity);
        }
    }
}

/// Snap every turret onto its host: same position, host heading plus the
/// turret's relative angle.
pub fn follow_targets(world: &mut World) {
    let turrets: Vec<(Entity, Entity, f32)> = world
        .query::<&Turret>()
        .iter()
        .map(|(entity, turret)| (entity, turret.target, turret.relative_angle))
        .collect();

    for (entity, target, relative_angle) in turrets {
        let host = match world.get::<&Transform>(target) {
            Ok(t) => *t,
            Err(_) => continue,
        };
        if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
            transform.position = host.position;
            transform.angle = wrap_degrees(relative_angle + host.angle);
        }
    }
}
