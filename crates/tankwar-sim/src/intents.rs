//! Intent state: what the player currently wants the tank to do.
//!
//! Input events only flip these flags (or request a shot). The engine reads
//! them once per tick; nothing else writes entity state from input.

use tracing::debug;

use tankwar_core::enums::{JoyAxis, Key};
use tankwar_core::input::{InputEvent, FIRE_KEY};

/// A request to spawn one shot at the next tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireRequest;

/// Held-input flags read by the orchestrator each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intents {
    pub tank_forward: bool,
    pub tank_backward: bool,
    pub tank_left: bool,
    pub tank_right: bool,
    pub canon_left: bool,
    pub canon_right: bool,
    /// Up/Down arrows are tracked but drive nothing.
    pub arrow_up: bool,
    pub arrow_down: bool,
    /// Last reported joystick X axis in [-1, 1].
    pub joystick_x: f32,
}

impl Intents {
    /// Apply one input event. Returns a fire request when the event fires.
    pub fn apply(&mut self, event: &InputEvent) -> Option<FireRequest> {
        match *event {
            InputEvent::KeyPress { key } => {
                self.set_key(key, true);
                (key == FIRE_KEY).then_some(FireRequest)
            }
            InputEvent::KeyRelease { key } => {
                self.set_key(key, false);
                None
            }
            InputEvent::JoyButtonPress { button } => {
                debug!(button, "joystick button pressed");
                Some(FireRequest)
            }
            InputEvent::JoyButtonRelease { button } => {
                debug!(button, "joystick button released");
                None
            }
            InputEvent::JoyAxisMotion { axis, value } => {
                debug!(?axis, value, "joystick axis motion");
                if axis == JoyAxis::X {
                    // Non-finite readings count as a centred stick.
                    self.joystick_x = if value.is_finite() {
                        value.clamp(-1.0, 1.0)
                    } else {
                        0.0
                    };
                }
                None
            }
            InputEvent::JoyHatMotion { x, y } => {
                debug!(x, y, "joystick hat motion");
                self.canon_left = x < 0;
                self.canon_right = x > 0;
                None
            }
        }
    }

    /// Whether the tank is being driven forward or backward this tick.
    pub fn thrusting(&self) -> bool {
        self.tank_forward || self.tank_backward
    }

    fn set_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::W => self.tank_forward = pressed,
            Key::S => self.tank_backward = pressed,
            Key::A => self.tank_left = pressed,
            Key::D => self.tank_right = pressed,
            Key::Left => self.canon_left = pressed,
            Key::Right => self.canon_right = pressed,
            Key::Up => self.arrow_up = pressed,
            Key::Down => self.arrow_down = pressed,
            Key::Space | Key::Other(_) => {}
        }
    }
}
