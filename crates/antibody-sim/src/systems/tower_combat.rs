//! Tower targeting and attack system.
//!
//! Each tick: tick the attack-visual timer (clearing the displayed
//! target when it expires) and the cooldown. Towers whose cooldown has
//! expired re-attack their cached target if it is still alive and in
//! range; otherwise they rescan for the live in-range enemy furthest
//! along the path. A failed scan leaves the cooldown expired so the next
//! tick retries immediately.

use hecs::{Entity, World};

use antibody_core::components::{
    EnemyInfo, Health, PathProgress, Position, StatusEffects, TowerCombat, TowerInfo,
};
use antibody_core::constants::ATTACK_EFFECT_DURATION;
use antibody_core::enums::{AttackStrategy, TowerKind};
use antibody_core::events::AudioEvent;
use antibody_core::types::GridPos;

use antibody_mechanics::strategies::{self, StrategyTarget};
use antibody_mechanics::targeting::{self, TargetCandidate};
use antibody_mechanics::{effects, motion};

use glam::Vec2;

/// A tower whose cooldown expired this tick.
struct ReadyTower {
    entity: Entity,
    kind: TowerKind,
    position: Vec2,
    range: f32,
    attack_rate: f32,
    base_damage: f32,
    strategy: AttackStrategy,
    cached_target: Option<u32>,
}

pub fn run(
    world: &mut World,
    path: &[GridPos],
    cell_size: f32,
    dt: f32,
    audio_events: &mut Vec<AudioEvent>,
) {
    // Pass 1: tick timers, collect towers ready to fire.
    let mut ready: Vec<ReadyTower> = Vec::new();
    for (entity, (info, combat, position)) in
        world.query_mut::<(&TowerInfo, &mut TowerCombat, &Position)>()
    {
        if combat.effect_timer > 0.0 {
            combat.effect_timer -= dt;
            if combat.effect_timer <= 0.0 {
                combat.target = None;
            }
        }

        combat.cooldown -= dt;
        if combat.cooldown <= 0.0 {
            ready.push(ReadyTower {
                entity,
                kind: info.kind,
                position: position.0,
                range: info.range,
                attack_rate: info.attack_rate,
                base_damage: info.base_damage,
                strategy: info.strategy.clone(),
                cached_target: combat.target,
            });
        }
    }
    if ready.is_empty() {
        return;
    }

    // Pass 2: snapshot enemy candidates once. Entities and candidates are
    // parallel, indexed together. The snapshot is refreshed in place after
    // every attack so one tower's kill or push-back is visible to the
    // towers that fire after it this tick.
    let mut enemy_entities: Vec<Entity> = Vec::new();
    let mut candidates: Vec<TargetCandidate> = Vec::new();
    for (entity, (info, health, progress, position)) in world
        .query::<(&EnemyInfo, &Health, &PathProgress, &Position)>()
        .iter()
    {
        enemy_entities.push(entity);
        candidates.push(TargetCandidate {
            id: info.id,
            position: position.0,
            path_key: progress.index as f32 + progress.progress,
            gone: effects::is_dead(health) || progress.reached_end,
        });
    }

    for tower in ready {
        // Re-attack the cached target if it is still valid; avoids a full
        // rescan every tick.
        let cached_index = tower.cached_target.and_then(|id| {
            candidates.iter().position(|c| {
                c.id == id && !c.gone && targeting::in_range(tower.position, c.position, tower.range)
            })
        });

        let chosen = cached_index
            .or_else(|| targeting::select_target(tower.position, tower.range, &candidates));
        let Some(index) = chosen else {
            // No candidate: cooldown stays expired until the next scan.
            continue;
        };

        let enemy_entity = enemy_entities[index];
        let enemy_id = candidates[index].id;

        let Ok((info, health, status, progress, position)) = world.query_one_mut::<(
            &EnemyInfo,
            &mut Health,
            &mut StatusEffects,
            &mut PathProgress,
            &mut Position,
        )>(enemy_entity) else {
            continue;
        };

        let mut target = StrategyTarget {
            kind: info.kind,
            health: &mut *health,
            status: &mut *status,
            path: &mut *progress,
        };
        let outcome = strategies::execute(&tower.strategy, tower.base_damage, &mut target);

        if outcome.pushed_back {
            // Position must reflect the push immediately.
            position.0 = motion::world_position(progress, path, cell_size);
        }

        // Refresh the shared candidate snapshot for later towers.
        candidates[index].position = position.0;
        candidates[index].path_key = progress.index as f32 + progress.progress;
        candidates[index].gone = effects::is_dead(health) || progress.reached_end;

        if let Ok(combat) = world.query_one_mut::<&mut TowerCombat>(tower.entity) {
            combat.target = Some(enemy_id);
            combat.cooldown = 1.0 / tower.attack_rate;
            combat.effect_timer = ATTACK_EFFECT_DURATION;
        }
        audio_events.push(AudioEvent::TowerAttack { tower: tower.kind });
    }
}
