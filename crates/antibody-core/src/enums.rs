//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast, fragile, small reward.
    Virus,
    /// Slow, tough, big reward.
    Bacteria,
    /// Cheap filler unit.
    FineParticle,
}

/// Tower archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Slows and damages (composite attack).
    Mucus,
    /// Slow-firing, heavy damage.
    Macrophage,
    /// Pushes enemies back along the path.
    Cough,
}

/// Game state machine tag (top-level phase).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateTag {
    /// Resetting counters and entities; transitions out immediately.
    #[default]
    Initializing,
    /// Wave announced, countdown running before spawning begins.
    WaveStarting,
    /// Wave in progress: spawning, combat, win/loss checks.
    Playing,
    /// Wave cleared, waiting for the next-wave request.
    WaveCleared,
    /// Terminal: all waves cleared.
    Won,
    /// Terminal: lives exhausted.
    Lost,
}

/// Wave scheduler status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveStatus {
    /// No wave has been started yet (or the scheduler was reset).
    #[default]
    WaitingToStart,
    /// Spawning or waiting for spawned enemies to resolve.
    InProgress,
    /// All enemies spawned and removed. Latched.
    Completed,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}

/// Attack behavior description attached to a tower.
///
/// A tagged-variant data description rather than a trait-object hierarchy:
/// the variants carry tuning parameters, execution lives in
/// `antibody-mechanics::strategies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AttackStrategy {
    /// Direct damage: `base_damage * multiplier`.
    SingleTarget { multiplier: f32 },
    /// Same shape as SingleTarget with a larger default multiplier,
    /// intended for slow-firing high-damage towers.
    HeavyDamage { multiplier: f32 },
    /// Push the target back along its path, optionally damaging it.
    PushBack { distance: f32, multiplier: f32 },
    /// Slow the target, optionally damaging it.
    SlowEffect {
        factor: f32,
        duration: f32,
        multiplier: f32,
    },
    /// Execute each child strategy in order, stopping if the target dies.
    Composite { strategies: Vec<AttackStrategy> },
}

impl AttackStrategy {
    /// Heavy damage at the conventional 2.0x multiplier.
    pub fn heavy_default() -> Self {
        AttackStrategy::HeavyDamage { multiplier: 2.0 }
    }
}
