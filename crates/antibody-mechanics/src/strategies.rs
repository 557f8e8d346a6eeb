//! Attack strategy execution.
//!
//! Strategies are described by the `AttackStrategy` data enum in
//! antibody-core; this module interprets them against a target's
//! components. Every variant treats an already-dead target as a no-op.

use antibody_core::components::{Health, PathProgress, StatusEffects};
use antibody_core::enums::{AttackStrategy, EnemyKind};

use crate::effects;
use crate::motion;

/// Mutable view of the components a strategy may touch on its target.
pub struct StrategyTarget<'a> {
    pub kind: EnemyKind,
    pub health: &'a mut Health,
    pub status: &'a mut StatusEffects,
    pub path: &'a mut PathProgress,
}

/// What an attack did, for event emission and position recomputation.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackOutcome {
    pub damage_dealt: f32,
    /// True if this attack crossed the death threshold.
    pub killed: bool,
    /// True if the target was moved backward (position must be rederived).
    pub pushed_back: bool,
    pub slowed: bool,
}

/// Execute a strategy against a target with the tower's base damage.
pub fn execute(
    strategy: &AttackStrategy,
    base_damage: f32,
    target: &mut StrategyTarget<'_>,
) -> AttackOutcome {
    let mut outcome = AttackOutcome::default();
    if effects::is_dead(target.health) {
        return outcome;
    }

    match strategy {
        AttackStrategy::SingleTarget { multiplier }
        | AttackStrategy::HeavyDamage { multiplier } => {
            let damage = base_damage * multiplier;
            effects::on_hit(target.kind, target.status);
            outcome.killed = effects::take_damage(target.health, damage);
            outcome.damage_dealt = damage;
        }
        AttackStrategy::PushBack {
            distance,
            multiplier,
        } => {
            effects::on_hit(target.kind, target.status);
            motion::push_back(target.path, *distance);
            outcome.pushed_back = true;
            if *multiplier > 0.0 {
                let damage = base_damage * multiplier;
                outcome.killed = effects::take_damage(target.health, damage);
                outcome.damage_dealt = damage;
            }
        }
        AttackStrategy::SlowEffect {
            factor,
            duration,
            multiplier,
        } => {
            effects::on_hit(target.kind, target.status);
            effects::apply_slow(target.status, *duration, *factor);
            outcome.slowed = true;
            if *multiplier > 0.0 {
                let damage = base_damage * multiplier;
                outcome.killed = effects::take_damage(target.health, damage);
                outcome.damage_dealt = damage;
            }
        }
        AttackStrategy::Composite { strategies } => {
            // Re-check death before each child so an earlier strategy that
            // kills the target short-circuits the rest.
            for child in strategies {
                if effects::is_dead(target.health) {
                    break;
                }
                let child_outcome = execute(child, base_damage, target);
                outcome.damage_dealt += child_outcome.damage_dealt;
                outcome.killed |= child_outcome.killed;
                outcome.pushed_back |= child_outcome.pushed_back;
                outcome.slowed |= child_outcome.slowed;
            }
        }
    }

    outcome
}
