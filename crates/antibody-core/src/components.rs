//! ECS components for the simulation world.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and in `antibody-mechanics`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AttackStrategy, EnemyKind, TowerKind};

/// Marks an entity as an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a placed tower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tower;

/// Immutable per-enemy stats assigned at spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyInfo {
    /// Stable identifier assigned by the engine at spawn time.
    /// Used instead of entity handles wherever state is serialized.
    pub id: u32,
    pub kind: EnemyKind,
    /// Movement speed in tiles (path segments) per second.
    pub speed: f32,
    /// Currency awarded on death.
    pub reward: u32,
    pub max_health: f32,
}

/// Mutable health. An entity is dead once `current <= 0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
}

/// Active status effects on an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusEffects {
    pub slowed: bool,
    /// Remaining slow duration in seconds.
    pub slow_timer: f32,
    /// Speed multiplier while slowed (1.0 = normal).
    pub slow_factor: f32,
}

impl Default for StatusEffects {
    fn default() -> Self {
        Self {
            slowed: false,
            slow_timer: 0.0,
            slow_factor: 1.0,
        }
    }
}

/// Progress along the shared path, in segment units.
///
/// `progress` is the normalized position within the current segment.
/// `reached_end` latches when the final waypoint is reached; movement is
/// a no-op afterward.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PathProgress {
    pub index: usize,
    pub progress: f32,
    pub reached_end: bool,
}

/// Derived world position. Recomputed from path progress (enemies) or
/// grid position (towers) whenever either the source or the viewport
/// cell size changes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Immutable per-tower stats assigned at placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerInfo {
    pub kind: TowerKind,
    /// Attack range in world units.
    pub range: f32,
    /// Attacks per second.
    pub attack_rate: f32,
    pub base_damage: f32,
    pub strategy: AttackStrategy,
}

/// Mutable tower combat state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TowerCombat {
    /// Time remaining until the next attack may fire. Never left negative
    /// after an attack (reset to `1 / attack_rate`).
    pub cooldown: f32,
    /// Remaining attack-visual window. The displayed target is cleared
    /// when it expires.
    pub effect_timer: f32,
    /// Enemy id of the current target, if any. May be stale; revalidated
    /// before every attack.
    pub target: Option<u32>,
}
