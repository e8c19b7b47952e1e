//! Steering math for the tank, its turret and pursuing enemies.
//!
//! All functions are pure: they compute headings and displacements and leave
//! applying them to the movement systems. Angles are in degrees,
//! counter-clockwise from +x.

use glam::Vec2;

pub use tankwar_core::types::wrap_degrees;

/// Displacement of `distance` along `angle`.
pub fn forward(angle: f32, distance: f32) -> Vec2 {
    let radians = angle.to_radians();
    Vec2::new(radians.cos(), radians.sin()) * distance
}

/// Heading from `from` to `to`: atan2(dy, dx) in degrees, wrapped to [0, 360).
pub fn heading_to(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    wrap_degrees(delta.y.atan2(delta.x).to_degrees())
}

/// Heading change for one tick of keyboard turning.
/// Left turns counter-clockwise. Both or neither held cancels out.
pub fn turn_delta(left: bool, right: bool, turn_speed: f32) -> f32 {
    match (left, right) {
        (true, false) => turn_speed,
        (false, true) => -turn_speed,
        _ => 0.0,
    }
}

/// Heading change for one tick of joystick turning.
/// The axis is rounded to -1, 0 or 1; pushing right turns clockwise.
pub fn joystick_turn(axis_x: f32, turn_speed: f32) -> f32 {
    -axis_x.round() * turn_speed
}

/// Per-tick thrust displacement of the tank body.
///
/// Speed scales with the fuel level (`fuel * fuel_speed_factor`), so a full
/// tank at factor 0.01 moves at exactly `speed`. Holding both directions
/// cancels out.
pub fn thrust_displacement(
    angle: f32,
    forward_held: bool,
    backward_held: bool,
    speed: f32,
    fuel: f32,
    fuel_speed_factor: f32,
) -> Vec2 {
    let distance = speed * fuel * fuel_speed_factor;
    match (forward_held, backward_held) {
        (true, false) => forward(angle, distance),
        (false, true) => forward(angle, -distance),
        _ => Vec2::ZERO,
    }
}

/// Keep a box of `half_width` around `x` inside [0, arena_width - 1].
/// Only the horizontal axis is clamped.
pub fn clamp_x_to_arena(x: f32, half_width: f32, arena_width: f32) -> f32 {
    if x - half_width < 0.0 {
        half_width
    } else if x + half_width > arena_width - 1.0 {
        arena_width - 1.0 - half_width
    } else {
        x
    }
}
