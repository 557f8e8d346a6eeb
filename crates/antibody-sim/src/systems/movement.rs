//! Enemy movement system.
//!
//! For each live enemy: decay status effects first, then advance along
//! the path at `speed * slow_factor`, then rederive the world position
//! at the current cell size.

use hecs::World;

use antibody_core::components::{EnemyInfo, Health, PathProgress, Position, StatusEffects};
use antibody_core::types::GridPos;

use antibody_mechanics::{effects, motion};

pub fn run(world: &mut World, path: &[GridPos], cell_size: f32, dt: f32) {
    let waypoint_count = path.len();

    for (_entity, (info, health, status, progress, position)) in world.query_mut::<(
        &EnemyInfo,
        &Health,
        &mut StatusEffects,
        &mut PathProgress,
        &mut Position,
    )>() {
        if effects::is_dead(health) || progress.reached_end {
            continue;
        }

        effects::tick_status(status, dt);

        let step = info.speed * status.slow_factor * dt;
        motion::advance(progress, waypoint_count, step);
        position.0 = motion::world_position(progress, path, cell_size);
    }
}
