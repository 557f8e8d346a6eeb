//! Wave scheduling: per-wave spawn instructions emitted over time.

use hecs::World;
use thiserror::Error;

use antibody_core::enums::{EnemyKind, WaveStatus};
use antibody_core::types::GridPos;

use crate::world_setup;

/// A single spawn within a wave: what to spawn and how long after the
/// previous spawn.
#[derive(Debug, Clone, Copy)]
pub struct SpawnInstruction {
    pub kind: EnemyKind,
    pub delay_secs: f32,
}

/// Ordered spawn list for one wave. Immutable once defined.
#[derive(Debug, Clone)]
pub struct WaveDefinition {
    pub spawns: Vec<SpawnInstruction>,
}

impl WaveDefinition {
    pub fn total_enemies(&self) -> usize {
        self.spawns.len()
    }
}

/// Why a wave start request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WaveStartError {
    #[error("wave number {0} is out of range")]
    OutOfRange(u32),
    #[error("a wave is already in progress")]
    AlreadyInProgress,
}

fn repeat(kind: EnemyKind, count: usize, delay_secs: f32) -> Vec<SpawnInstruction> {
    vec![SpawnInstruction { kind, delay_secs }; count]
}

/// The stock three-wave campaign with escalating counts and spawn rates.
pub fn default_waves() -> Vec<WaveDefinition> {
    vec![
        WaveDefinition {
            spawns: [
                repeat(EnemyKind::Virus, 30, 0.6),
                repeat(EnemyKind::Bacteria, 5, 1.0),
            ]
            .concat(),
        },
        WaveDefinition {
            spawns: [
                repeat(EnemyKind::Virus, 20, 0.5),
                repeat(EnemyKind::Bacteria, 20, 0.8),
                repeat(EnemyKind::FineParticle, 10, 0.7),
            ]
            .concat(),
        },
        WaveDefinition {
            spawns: [
                repeat(EnemyKind::Virus, 15, 0.4),
                repeat(EnemyKind::Bacteria, 25, 0.6),
                repeat(EnemyKind::FineParticle, 30, 0.4),
            ]
            .concat(),
        },
    ]
}

/// Emits a wave's spawn instructions over time and tracks how many of
/// its enemies are still unresolved.
#[derive(Debug, Clone)]
pub struct WaveScheduler {
    definitions: Vec<WaveDefinition>,
    status: WaveStatus,
    wave_number: u32,
    spawn_index: usize,
    time_until_next_spawn: f32,
    /// Decremented exactly once per enemy removal (death or reach-end).
    /// Not clamped: going negative means the removal-notification
    /// invariant was violated upstream.
    enemies_remaining: i32,
}

impl WaveScheduler {
    pub fn new(definitions: Vec<WaveDefinition>) -> Self {
        Self {
            definitions,
            status: WaveStatus::WaitingToStart,
            wave_number: 0,
            spawn_index: 0,
            time_until_next_spawn: 0.0,
            enemies_remaining: 0,
        }
    }

    pub fn with_default_waves() -> Self {
        Self::new(default_waves())
    }

    pub fn status(&self) -> WaveStatus {
        self.status
    }

    pub fn wave_count(&self) -> u32 {
        self.definitions.len() as u32
    }

    pub fn enemies_remaining(&self) -> i32 {
        self.enemies_remaining
    }

    /// True once every instruction of the current wave has been spawned.
    pub fn all_spawned(&self) -> bool {
        match self.current_spawns() {
            Some(spawns) => self.spawn_index >= spawns.len(),
            None => false,
        }
    }

    fn current_spawns(&self) -> Option<&[SpawnInstruction]> {
        if self.wave_number == 0 {
            return None;
        }
        self.definitions
            .get(self.wave_number as usize - 1)
            .map(|def| def.spawns.as_slice())
    }

    /// Begin emitting wave `wave_number` (1-based). Rejected without any
    /// state change if the number is out of range or a wave is already
    /// running.
    pub fn start_wave(&mut self, wave_number: u32) -> Result<(), WaveStartError> {
        if wave_number == 0 || wave_number > self.wave_count() {
            return Err(WaveStartError::OutOfRange(wave_number));
        }
        if self.status == WaveStatus::InProgress {
            return Err(WaveStartError::AlreadyInProgress);
        }

        let def = &self.definitions[wave_number as usize - 1];
        self.wave_number = wave_number;
        self.status = WaveStatus::InProgress;
        self.spawn_index = 0;
        self.enemies_remaining = def.total_enemies() as i32;
        self.time_until_next_spawn = def.spawns.first().map_or(f32::INFINITY, |s| s.delay_secs);
        Ok(())
    }

    /// Per-tick spawn pass. Spawns every instruction whose time has come,
    /// carrying negative leftover into the next delay so large `dt` steps
    /// stay correct. After the final spawn the timer pins to infinity.
    pub fn run(
        &mut self,
        world: &mut World,
        dt: f32,
        path: &[GridPos],
        cell_size: f32,
        next_enemy_id: &mut u32,
    ) {
        if self.status != WaveStatus::InProgress || self.all_spawned() {
            return;
        }

        let wave_index = self.wave_number as usize - 1;
        self.time_until_next_spawn -= dt;

        while self.time_until_next_spawn <= 0.0 {
            let Some(instruction) = self.definitions[wave_index]
                .spawns
                .get(self.spawn_index)
                .copied()
            else {
                break;
            };

            world_setup::spawn_enemy(world, instruction.kind, path, cell_size, next_enemy_id);
            self.spawn_index += 1;

            match self.definitions[wave_index].spawns.get(self.spawn_index) {
                Some(next) => self.time_until_next_spawn += next.delay_secs,
                None => {
                    self.time_until_next_spawn = f32::INFINITY;
                    break;
                }
            }
        }
    }

    /// True iff every instruction has been spawned AND every spawned
    /// enemy has been removed. Latches the status to Completed on first
    /// observation; repeated calls keep returning true.
    pub fn check_wave_completion(&mut self) -> bool {
        let finished_spawning = self.status != WaveStatus::WaitingToStart && self.all_spawned();
        if finished_spawning && self.enemies_remaining <= 0 {
            self.status = WaveStatus::Completed;
            true
        } else {
            false
        }
    }

    /// Called exactly once per enemy removal (death or reach-end).
    pub fn notify_enemy_removed(&mut self) {
        if self.status == WaveStatus::InProgress {
            debug_assert!(
                self.enemies_remaining > 0,
                "removal notified more times than enemies spawned"
            );
            self.enemies_remaining -= 1;
        }
    }

    pub fn reset(&mut self) {
        self.status = WaveStatus::WaitingToStart;
        self.wave_number = 0;
        self.spawn_index = 0;
        self.time_until_next_spawn = 0.0;
        self.enemies_remaining = 0;
    }
}
