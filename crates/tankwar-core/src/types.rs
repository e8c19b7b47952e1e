//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Placement of an entity in the arena.
/// x = right, y = up, origin at the bottom-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    /// Heading in degrees, counter-clockwise from +x, kept in [0, 360).
    pub angle: f32,
}

/// Axis-aligned collision extents, centered on the entity position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    pub half_width: f32,
    pub half_height: f32,
}

/// Axis-aligned bounding box in arena coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

/// Playing field rectangle [0, width] x [0, height].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds (sum of delivered delta times).
    pub elapsed_secs: f64,
}

/// Normalize an angle in degrees into [0, 360).
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl Transform {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            angle: wrap_degrees(angle),
        }
    }

    /// Turn by `delta` degrees, keeping the heading wrapped.
    pub fn rotate(&mut self, delta: f32) {
        self.angle = wrap_degrees(self.angle + delta);
    }
}

impl Hitbox {
    pub const fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half_width,
            half_height,
        }
    }

    pub const fn square(half_extent: f32) -> Self {
        Self::new(half_extent, half_extent)
    }

    /// World-space box of this hitbox centered at `center`.
    pub fn bounds(&self, center: Vec2) -> Aabb {
        let half = Vec2::new(self.half_width, self.half_height);
        Aabb {
            min: center - half,
            max: center + half,
        }
    }
}

impl Aabb {
    /// Whether the two boxes intersect. Edges that merely touch do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether `point` lies inside the arena, edges included.
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Whether `point` lies inside the arena grown by `margin` on every side.
    pub fn contains_with_margin(&self, point: Vec2, margin: f32) -> bool {
        (-margin..=self.width + margin).contains(&point.x)
            && (-margin..=self.height + margin).contains(&point.y)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(dt);
    }
}
