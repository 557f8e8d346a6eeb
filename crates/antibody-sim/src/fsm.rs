//! Game state machine nodes.
//!
//! The engine owns exactly one `GameState` at a time and applies
//! transitions through `GameEngine::change_state`, which runs the exit
//! and enter effects exactly once per transition. Timed transitions are
//! plain countdown fields decremented in the owning state's update, not
//! background tasks.

use antibody_core::enums::StateTag;

/// A node of the game state machine. Variants carry the per-state data
/// they need (countdowns); shared game data lives on the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameState {
    /// Resets counters and entities, then immediately chains into
    /// WaveStarting. Never observed across a tick boundary.
    Initializing,
    /// Wave announced; spawning begins when the countdown expires.
    WaveStarting { countdown: f32 },
    /// Wave live: spawning, combat, and win/loss checks.
    Playing,
    /// All enemies resolved; waiting for the next-wave request, or for
    /// the optional auto-advance timer.
    WaveCleared { auto_timer: Option<f32> },
    /// Terminal: every wave cleared.
    Won,
    /// Terminal: lives exhausted.
    Lost,
}

impl GameState {
    pub fn tag(&self) -> StateTag {
        match self {
            GameState::Initializing => StateTag::Initializing,
            GameState::WaveStarting { .. } => StateTag::WaveStarting,
            GameState::Playing => StateTag::Playing,
            GameState::WaveCleared { .. } => StateTag::WaveCleared,
            GameState::Won => StateTag::Won,
            GameState::Lost => StateTag::Lost,
        }
    }

    /// Terminal states halt entity updates; only Restart leaves them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}
