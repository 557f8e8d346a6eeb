//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::TowerKind;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Attempt to place a tower at a grid coordinate. Failure (occupied,
    /// unplaceable, insufficient funds) surfaces as a warning alert.
    PlaceTower { kind: TowerKind, x: i32, y: i32 },
    /// Start the next wave (valid while a wave is cleared).
    RequestNextWave,
    /// Update the viewport cell size used for world-coordinate derivation.
    SetCellSize { size: f32 },
    /// Reset everything and start a new game.
    Restart,
}
