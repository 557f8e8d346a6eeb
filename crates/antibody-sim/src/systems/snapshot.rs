//! Snapshot system: queries the ECS world and builds a complete
//! GameSnapshot.
//!
//! Read-only over the world; it never modifies anything.

use hecs::World;

use antibody_core::components::{
    EnemyInfo, Health, PathProgress, Position, StatusEffects, TowerCombat, TowerInfo,
};
use antibody_core::enums::{StateTag, WaveStatus};
use antibody_core::events::{Alert, AudioEvent};
use antibody_core::state::{EnemyView, GameSnapshot, TowerView};
use antibody_core::types::{GridPos, SimTime};

#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    state: StateTag,
    lives: u32,
    currency: u32,
    wave: u32,
    max_waves: u32,
    wave_status: WaveStatus,
    wave_countdown_secs: f32,
    wave_clear_message: Option<String>,
    game_over: bool,
    alerts: Vec<Alert>,
    audio_events: Vec<AudioEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        state,
        lives,
        currency,
        wave,
        max_waves,
        wave_status,
        wave_countdown_secs,
        enemies: build_enemies(world),
        towers: build_towers(world),
        wave_clear_message,
        game_over,
        alerts,
        audio_events,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EnemyInfo, &Health, &StatusEffects, &PathProgress, &Position)>()
        .iter()
        .map(|(_, (info, health, status, progress, position))| EnemyView {
            id: info.id,
            kind: info.kind,
            position: position.0,
            health_pct: (health.current / info.max_health).clamp(0.0, 1.0),
            slowed: status.slowed,
            path_index: progress.index,
            progress: progress.progress,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&TowerInfo, &TowerCombat, &GridPos, &Position)>()
        .iter()
        .map(|(_, (info, combat, grid, position))| TowerView {
            kind: info.kind,
            grid: *grid,
            position: position.0,
            range: info.range,
            target: combat.target,
            attack_effect_active: combat.effect_timer > 0.0,
        })
        .collect();

    towers.sort_by_key(|t| (t.grid.y, t.grid.x));
    towers
}
