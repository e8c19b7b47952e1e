//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// Kind of collectible lying on the arena floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    /// Grants coins on contact.
    Coin,
    /// Refills fuel on contact.
    Fuel,
}

/// Keyboard keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    /// Any other key, by raw code. Ignored by the game.
    Other(u32),
}

/// Joystick axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoyAxis {
    #[default]
    X,
    Y,
    Z,
    Rx,
    Ry,
    Rz,
}

/// Input devices available to the player.
///
/// A missing joystick is a configuration choice, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControllerSetup {
    #[default]
    KeyboardOnly,
    Joystick {
        name: String,
    },
}

impl ControllerSetup {
    pub fn has_joystick(&self) -> bool {
        matches!(self, ControllerSetup::Joystick { .. })
    }
}
