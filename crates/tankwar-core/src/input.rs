//! Input events delivered by the windowing/input collaborator.
//!
//! Events are queued and applied to the intent state at the next tick
//! boundary. They never touch entities directly.

use serde::{Deserialize, Serialize};

use crate::enums::{JoyAxis, Key};

/// All input the game reacts to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    // --- Keyboard ---
    KeyPress { key: Key },
    KeyRelease { key: Key },

    // --- Joystick ---
    JoyButtonPress { button: u32 },
    JoyButtonRelease { button: u32 },
    /// Axis position in [-1.0, 1.0].
    JoyAxisMotion { axis: JoyAxis, value: f32 },
    /// Hat switch position, each component in {-1, 0, 1}.
    JoyHatMotion { x: i32, y: i32 },
}

/// The key that fires a shot.
pub const FIRE_KEY: Key = Key::Space;
