//! Application state shared between the front end and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use tankwar_core::input::InputEvent;
use tankwar_core::state::GameStateSnapshot;

/// Messages sent from the front end to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A raw input event to queue on the engine.
    Input(InputEvent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// The sender lives behind a `Mutex` because `mpsc::Sender` is not `Sync`.
/// The latest snapshot is shared with the game loop thread through an `Arc`.
pub struct AppState {
    /// `None` until `start_game` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_thread: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a game loop thread has been started and not yet stopped.
    pub fn is_running(&self) -> bool {
        self.loop_thread
            .lock()
            .map(|thread| thread.is_some())
            .unwrap_or(false)
    }
}
