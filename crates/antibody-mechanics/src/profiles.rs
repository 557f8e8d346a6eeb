//! Archetype stat tables.
//!
//! Consolidates the per-kind tuning for enemies and towers. These are the
//! compiled-in definitions the factories build entities from.

use antibody_core::constants::*;
use antibody_core::enums::{AttackStrategy, EnemyKind, TowerKind};

/// Base stats for an enemy kind.
#[derive(Debug, Clone, Copy)]
pub struct EnemySpec {
    pub max_health: f32,
    /// Tiles (path segments) per second.
    pub speed: f32,
    /// Currency awarded on death.
    pub reward: u32,
}

/// Get the stat table for a given enemy kind.
pub fn enemy_spec(kind: EnemyKind) -> EnemySpec {
    match kind {
        EnemyKind::Virus => EnemySpec {
            max_health: VIRUS_HEALTH,
            speed: VIRUS_SPEED,
            reward: VIRUS_REWARD,
        },
        EnemyKind::Bacteria => EnemySpec {
            max_health: BACTERIA_HEALTH,
            speed: BACTERIA_SPEED,
            reward: BACTERIA_REWARD,
        },
        EnemyKind::FineParticle => EnemySpec {
            max_health: FINE_PARTICLE_HEALTH,
            speed: FINE_PARTICLE_SPEED,
            reward: FINE_PARTICLE_REWARD,
        },
    }
}

/// Base stats for a tower kind.
#[derive(Debug, Clone, Copy)]
pub struct TowerSpec {
    pub cost: u32,
    /// World units.
    pub range: f32,
    /// Attacks per second.
    pub attack_rate: f32,
    pub base_damage: f32,
}

/// Get the stat table for a given tower kind.
pub fn tower_spec(kind: TowerKind) -> TowerSpec {
    match kind {
        TowerKind::Mucus => TowerSpec {
            cost: MUCUS_COST,
            range: TOWER_RANGE,
            attack_rate: MUCUS_ATTACK_RATE,
            base_damage: TOWER_BASE_DAMAGE,
        },
        TowerKind::Macrophage => TowerSpec {
            cost: MACROPHAGE_COST,
            range: TOWER_RANGE,
            attack_rate: MACROPHAGE_ATTACK_RATE,
            base_damage: TOWER_BASE_DAMAGE,
        },
        TowerKind::Cough => TowerSpec {
            cost: COUGH_COST,
            range: TOWER_RANGE,
            attack_rate: COUGH_ATTACK_RATE,
            base_damage: TOWER_BASE_DAMAGE,
        },
    }
}

/// Build the attack strategy a tower kind fires with.
pub fn tower_strategy(kind: TowerKind) -> AttackStrategy {
    match kind {
        // Slow first (no damage on that step), then standard damage.
        TowerKind::Mucus => AttackStrategy::Composite {
            strategies: vec![
                AttackStrategy::SlowEffect {
                    factor: MUCUS_SLOW_FACTOR,
                    duration: MUCUS_SLOW_DURATION_SECS,
                    multiplier: 0.0,
                },
                AttackStrategy::SingleTarget { multiplier: 1.0 },
            ],
        },
        TowerKind::Macrophage => AttackStrategy::HeavyDamage {
            multiplier: MACROPHAGE_DAMAGE_MULTIPLIER,
        },
        TowerKind::Cough => AttackStrategy::PushBack {
            distance: COUGH_PUSH_DISTANCE,
            multiplier: COUGH_DAMAGE_MULTIPLIER,
        },
    }
}
