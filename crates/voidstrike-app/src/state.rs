//! Application state shared between the frontend binding and the game loop
//! thread.

use std::sync::{Arc, Mutex};

use voidstrike_core::commands::PlayerCommand;
use voidstrike_core::state::GameSnapshot;

/// Commands sent from the frontend binding to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot slot, shared with the game loop thread for synchronous
/// polling.
pub type SharedSnapshot = Arc<Mutex<Option<GameSnapshot>>>;
