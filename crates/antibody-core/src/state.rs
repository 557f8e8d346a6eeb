//! Game state snapshot: the complete visible state produced each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, StateTag, TowerKind, WaveStatus};
use crate::events::{Alert, AudioEvent};
use crate::types::{GridPos, SimTime};

/// Complete game state handed to the presentation layer after each tick.
///
/// `time.tick` serves as the change counter: the UI polls once per frame
/// and redraws when the tick advances.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub state: StateTag,
    pub lives: u32,
    pub currency: u32,
    /// Current wave number (0 before the first wave starts).
    pub wave: u32,
    pub max_waves: u32,
    pub wave_status: WaveStatus,
    /// Remaining wave-start countdown (0 outside WaveStarting).
    pub wave_countdown_secs: f32,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    /// Message shown between waves, if any.
    pub wave_clear_message: Option<String>,
    pub game_over: bool,
    pub alerts: Vec<Alert>,
    pub audio_events: Vec<AudioEvent>,
}

/// A visible enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec2,
    /// Health fraction in [0, 1].
    pub health_pct: f32,
    pub slowed: bool,
    pub path_index: usize,
    pub progress: f32,
}

/// A visible tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub kind: TowerKind,
    pub grid: GridPos,
    pub position: Vec2,
    pub range: f32,
    /// Enemy id of the displayed target, if the attack visual is active.
    pub target: Option<u32>,
    pub attack_effect_active: bool,
}
