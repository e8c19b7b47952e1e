//! Front-end entry points.
//!
//! A renderer or input backend calls these to start the game, forward raw
//! input events and poll the latest snapshot. They bridge to the game loop
//! thread via channels.

use tracing::info;

use tankwar_core::input::InputEvent;
use tankwar_core::state::GameStateSnapshot;
use tankwar_sim::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the game. Spawns the game loop thread if not already running.
pub fn start_game(state: &AppState, config: SimConfig) -> Result<(), String> {
    config.validate()?;

    let mut thread = state.loop_thread.lock().map_err(|e| e.to_string())?;
    if thread.is_some() {
        return Err("Game already running".into());
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;
    *tx_lock = Some(cmd_tx);
    *thread = Some(handle);

    Ok(())
}

/// Forward one input event to the game.
pub fn send_input(event: InputEvent, state: &AppState) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::Input(event))
            .map_err(|e| format!("Failed to send input: {}", e)),
        None => Err("Game not started".into()),
    }
}

/// Get the latest snapshot, if a tick has run yet.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to finish.
pub fn stop_game(state: &AppState) -> Result<(), String> {
    let handle = state
        .loop_thread
        .lock()
        .map_err(|e| e.to_string())?
        .take()
        .ok_or_else(|| "Game not started".to_string())?;

    if let Some(tx) = state.command_tx.lock().map_err(|e| e.to_string())?.take() {
        // A send error means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }

    handle
        .join()
        .map_err(|_| "game loop thread panicked".to_string())?;
    info!("game stopped");
    Ok(())
}
