//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{AlertLevel, EnemyKind, TowerKind};

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A wave has begun playing out.
    WaveStart { wave: u32 },
    /// All enemies of the wave have been resolved.
    WaveCleared { wave: u32 },
    /// Final wave cleared.
    GameWon,
    /// Lives exhausted.
    GameLost,
    /// An enemy reached the end of the path.
    EnemyReachedEnd { kind: EnemyKind },
    /// An enemy was destroyed by tower fire.
    EnemyDestroyed { kind: EnemyKind, reward: u32 },
    /// A tower was successfully placed.
    TowerPlaced { kind: TowerKind },
    /// A tower fired at a target.
    TowerAttack { tower: TowerKind },
}

/// Alert for the UI alert queue. Doubles as the simulation's log surface:
/// rejected commands and other non-fatal conditions are reported here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
