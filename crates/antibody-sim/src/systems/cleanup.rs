//! Reconciliation system: resolves enemy deaths and reach-end events.
//!
//! Runs after movement and combat. This is the single place that awards
//! kill rewards, costs lives, and notifies the wave scheduler (once per
//! removed enemy) before despawning. Uses a pre-allocated buffer to
//! avoid per-tick allocation.

use hecs::{Entity, World};

use antibody_core::components::{Enemy, EnemyInfo, Health, PathProgress};
use antibody_core::events::AudioEvent;

use antibody_mechanics::effects;

use crate::economy::Economy;
use crate::systems::wave_scheduler::WaveScheduler;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    scheduler: &mut WaveScheduler,
    economy: &mut Economy,
    lives: &mut u32,
    lives_at_stake: bool,
    audio_events: &mut Vec<AudioEvent>,
) {
    despawn_buffer.clear();

    for (entity, (_enemy, info, health, progress)) in world
        .query::<(&Enemy, &EnemyInfo, &Health, &PathProgress)>()
        .iter()
    {
        if effects::is_dead(health) {
            // Killed by tower fire: award the bounty.
            economy.add(info.reward);
            scheduler.notify_enemy_removed();
            audio_events.push(AudioEvent::EnemyDestroyed {
                kind: info.kind,
                reward: info.reward,
            });
            despawn_buffer.push(entity);
        } else if progress.reached_end {
            // Breached: costs a life, but only while a wave is live.
            if lives_at_stake {
                *lives = lives.saturating_sub(1);
            }
            scheduler.notify_enemy_removed();
            audio_events.push(AudioEvent::EnemyReachedEnd { kind: info.kind });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
