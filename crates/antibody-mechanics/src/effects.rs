//! Health and status-effect application.

use antibody_core::components::{Health, StatusEffects};
use antibody_core::enums::EnemyKind;

/// True once health has dropped to or below zero.
pub fn is_dead(health: &Health) -> bool {
    health.current <= 0.0
}

/// Subtract health. No-op if already dead. Returns true exactly when this
/// call crossed the death threshold, so the caller can run the death
/// sequence once.
pub fn take_damage(health: &mut Health, amount: f32) -> bool {
    if is_dead(health) {
        return false;
    }
    health.current -= amount;
    is_dead(health)
}

/// Apply a slow effect. The timer refreshes to `max(remaining, duration)`
/// and the factor is overwritten (last applied wins, not multiplicative).
pub fn apply_slow(status: &mut StatusEffects, duration: f32, factor: f32) {
    debug_assert!(
        (0.0..=1.0).contains(&factor),
        "slow factor must be in [0, 1], got {factor}"
    );
    status.slowed = true;
    status.slow_timer = status.slow_timer.max(duration);
    status.slow_factor = factor.clamp(0.0, 1.0);
}

/// Decay active status effects by `dt`. Clears the slow (factor back to
/// 1.0) when its timer expires.
pub fn tick_status(status: &mut StatusEffects, dt: f32) {
    if status.slowed {
        status.slow_timer -= dt;
        if status.slow_timer <= 0.0 {
            status.slowed = false;
            status.slow_timer = 0.0;
            status.slow_factor = 1.0;
        }
    }
}

/// Reactive hook invoked before damage application. Dispatches on enemy
/// kind; no current kind reacts, but strategies route every hit through
/// here so a reaction only needs a new match arm.
pub fn on_hit(kind: EnemyKind, _status: &mut StatusEffects) {
    match kind {
        EnemyKind::Virus | EnemyKind::Bacteria | EnemyKind::FineParticle => {}
    }
}
