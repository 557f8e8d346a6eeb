//! Entity spawn factories.
//!
//! Build enemy and tower component bundles from the archetype profiles.

use hecs::World;

use antibody_core::components::*;
use antibody_core::enums::{EnemyKind, TowerKind};
use antibody_core::types::GridPos;

use antibody_mechanics::motion;
use antibody_mechanics::profiles;

/// Spawn an enemy at the start of the path. The engine supplies and
/// advances the id counter so every enemy gets a unique stable id.
pub fn spawn_enemy(
    world: &mut World,
    kind: EnemyKind,
    path: &[GridPos],
    cell_size: f32,
    next_enemy_id: &mut u32,
) -> hecs::Entity {
    let spec = profiles::enemy_spec(kind);
    let id = *next_enemy_id;
    *next_enemy_id += 1;

    let progress = PathProgress::default();
    let position = Position(motion::world_position(&progress, path, cell_size));

    world.spawn((
        Enemy,
        EnemyInfo {
            id,
            kind,
            speed: spec.speed,
            reward: spec.reward,
            max_health: spec.max_health,
        },
        Health {
            current: spec.max_health,
        },
        StatusEffects::default(),
        progress,
        position,
    ))
}

/// Spawn a tower at a grid position. Placement validity and cost are the
/// engine's responsibility; this only assembles the bundle.
pub fn spawn_tower(
    world: &mut World,
    kind: TowerKind,
    grid: GridPos,
    cell_size: f32,
) -> hecs::Entity {
    let spec = profiles::tower_spec(kind);

    world.spawn((
        Tower,
        TowerInfo {
            kind,
            range: spec.range,
            attack_rate: spec.attack_rate,
            base_damage: spec.base_damage,
            strategy: profiles::tower_strategy(kind),
        },
        grid,
        Position(grid.to_world(cell_size)),
        // Cooldown starts expired: a fresh tower may fire immediately.
        TowerCombat::default(),
    ))
}
