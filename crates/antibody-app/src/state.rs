//! Application state shared between the embedder and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use antibody_core::commands::PlayerCommand;
use antibody_core::state::GameSnapshot;

/// Commands sent from the embedder to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// The snapshot slot is written by the loop thread after every tick and
/// read synchronously by the UI thread, which polls once per frame.
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous queries.
    pub latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
