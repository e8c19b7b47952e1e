//! Scripted pilot for headless runs.
//!
//! Produces the input events a player would generate: drive in a loose loop,
//! sweep the turret back and forth and fire at a steady cadence. The script
//! depends only on the tick number, so runs are reproducible.

use tankwar_core::constants::TICK_RATE;
use tankwar_core::enums::Key;
use tankwar_core::input::InputEvent;

/// Ticks per full drive cycle: straight, then a left turn.
const DRIVE_CYCLE: u64 = 3 * TICK_RATE as u64;
const TURN_TICKS: u64 = TICK_RATE as u64 / 2;
/// Ticks per turret sweep in one direction.
const SWEEP_TICKS: u64 = 2 * TICK_RATE as u64;
const FIRE_EVERY: u64 = TICK_RATE as u64 / 4;

#[derive(Debug, Default)]
pub struct DemoPilot {
    driving: bool,
    turning: bool,
    sweep_left: Option<bool>,
}

impl DemoPilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input events for `tick`. Held keys are pressed once and released when
    /// the script moves on.
    pub fn inputs_for_tick(&mut self, tick: u64) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if !self.driving {
            events.push(InputEvent::KeyPress { key: Key::W });
            self.driving = true;
        }

        let turning = tick % DRIVE_CYCLE >= DRIVE_CYCLE - TURN_TICKS;
        if turning != self.turning {
            events.push(toggle(Key::A, turning));
            self.turning = turning;
        }

        let sweep_left = (tick / SWEEP_TICKS) % 2 == 0;
        if self.sweep_left != Some(sweep_left) {
            let (release, press) = if sweep_left {
                (Key::Right, Key::Left)
            } else {
                (Key::Left, Key::Right)
            };
            if self.sweep_left.is_some() {
                events.push(InputEvent::KeyRelease { key: release });
            }
            events.push(InputEvent::KeyPress { key: press });
            self.sweep_left = Some(sweep_left);
        }

        if tick % FIRE_EVERY == 0 {
            events.push(InputEvent::KeyPress { key: Key::Space });
            events.push(InputEvent::KeyRelease { key: Key::Space });
        }

        events
    }
}

fn toggle(key: Key, pressed: bool) -> InputEvent {
    if pressed {
        InputEvent::KeyPress { key }
    } else {
        InputEvent::KeyRelease { key }
    }
}
