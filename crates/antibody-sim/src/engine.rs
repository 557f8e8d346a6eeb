//! Simulation engine: the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, the map, the state machine, and
//! all counters. `tick(dt)` processes queued commands, updates the
//! current state, runs the entity systems, and produces a `GameSnapshot`.
//! Not reentrant: one tick completes fully before the next begins, and
//! all entity mutation happens inside it.

use std::collections::VecDeque;

use hecs::{Entity, World};

use antibody_core::commands::PlayerCommand;
use antibody_core::components::{PathProgress, Position, Tower};
use antibody_core::constants::{
    DEFAULT_CELL_SIZE, MAX_DT, STARTING_CURRENCY, STARTING_LIVES, WAVE_START_COUNTDOWN_SECS,
};
use antibody_core::enums::{AlertLevel, StateTag, TowerKind};
use antibody_core::events::{Alert, AudioEvent};
use antibody_core::map::Map;
use antibody_core::state::GameSnapshot;
use antibody_core::types::{GridPos, SimTime};

use antibody_mechanics::{motion, profiles};

use crate::economy::Economy;
use crate::fsm::GameState;
use crate::systems;
use crate::systems::wave_scheduler::{WaveDefinition, WaveScheduler};
use crate::world_setup;

/// Configuration for a new game. Explicitly constructed and injected so
/// multiple engine instances can run side by side (there are no global
/// managers).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub starting_lives: u32,
    pub starting_currency: u32,
    /// Countdown between announcing a wave and it going live. 0 advances
    /// immediately.
    pub wave_start_countdown_secs: f32,
    /// When set, a cleared wave auto-advances after this many seconds
    /// instead of waiting for an explicit RequestNextWave.
    pub wave_cleared_auto_secs: Option<f32>,
    pub cell_size: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            starting_currency: STARTING_CURRENCY,
            wave_start_countdown_secs: WAVE_START_COUNTDOWN_SECS,
            wave_cleared_auto_secs: None,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

/// The simulation engine. Owns the ECS world and all game state.
pub struct GameEngine {
    world: World,
    map: Map,
    state: GameState,
    scheduler: WaveScheduler,
    economy: Economy,
    lives: u32,
    wave: u32,
    time: SimTime,
    cell_size: f32,
    next_enemy_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    alerts: Vec<Alert>,
    wave_clear_message: Option<String>,
    game_over: bool,
    config: EngineConfig,
}

impl GameEngine {
    /// Create an engine on the default map and wave tables. Ends up in
    /// WaveStarting for wave 1 (Initializing chains straight through).
    pub fn new(config: EngineConfig) -> Self {
        Self::with_map_and_waves(
            config,
            Map::with_default_layout(),
            systems::wave_scheduler::default_waves(),
        )
    }

    /// Create an engine with a custom map and wave tables.
    pub fn with_map_and_waves(
        config: EngineConfig,
        map: Map,
        waves: Vec<WaveDefinition>,
    ) -> Self {
        let mut engine = Self {
            world: World::new(),
            map,
            state: GameState::Initializing,
            scheduler: WaveScheduler::new(waves),
            economy: Economy::new(config.starting_currency),
            lives: config.starting_lives,
            wave: 0,
            time: SimTime::default(),
            cell_size: config.cell_size,
            next_enemy_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            alerts: Vec::new(),
            wave_clear_message: None,
            game_over: false,
            config,
        };
        engine.change_state(GameState::Initializing);
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick of `dt` seconds (clamped to
    /// `MAX_DT`) and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> GameSnapshot {
        let dt = dt.clamp(0.0, MAX_DT);

        self.process_commands();

        if !self.state.is_terminal() {
            self.update_state(dt);
            if !self.state.is_terminal() {
                self.run_entity_systems(dt);
            }
            self.time.advance(dt);
        }

        self.build_snapshot()
    }

    // --- Read accessors for embedders and tests ---

    pub fn state_tag(&self) -> StateTag {
        self.state.tag()
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn currency(&self) -> u32 {
        self.economy.currency()
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn max_waves(&self) -> u32 {
        self.scheduler.wave_count()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// True if the tile is placeable and no tower already occupies it.
    pub fn can_place_tower_at(&self, x: i32, y: i32) -> bool {
        self.map.can_place_tower_at(x, y) && self.tower_at(x, y).is_none()
    }

    // --- Synchronous command surface ---
    // Queued PlayerCommands route through these at the tick boundary;
    // same-thread embedders may call them directly between ticks.

    /// Attempt to place a tower. All-or-nothing: every check passes
    /// before currency is deducted and the entity is spawned. Failures
    /// surface as warning alerts and return false.
    pub fn attempt_place_tower(&mut self, kind: TowerKind, x: i32, y: i32) -> bool {
        if self.state.is_terminal() {
            self.warn(format!("cannot place tower: game is over ({x}, {y})"));
            return false;
        }
        if !self.map.can_place_tower_at(x, y) {
            self.warn(format!("tile ({x}, {y}) does not allow tower placement"));
            return false;
        }
        if self.tower_at(x, y).is_some() {
            self.warn(format!("tile ({x}, {y}) is already occupied by a tower"));
            return false;
        }
        let spec = profiles::tower_spec(kind);
        if !self.economy.spend(spec.cost) {
            self.warn(format!(
                "insufficient currency for {kind:?}: need {}, have {}",
                spec.cost,
                self.economy.currency()
            ));
            return false;
        }

        world_setup::spawn_tower(&mut self.world, kind, GridPos::new(x, y), self.cell_size);
        self.audio_events.push(AudioEvent::TowerPlaced { kind });
        true
    }

    /// Start the next wave. Valid only while a wave is cleared; anything
    /// else is rejected with a warning alert.
    pub fn request_next_wave(&mut self) {
        match self.state {
            GameState::WaveCleared { .. } => {
                if self.wave >= self.scheduler.wave_count() {
                    // All waves already cleared; Playing normally goes
                    // straight to Won, so this is a belt-and-braces path.
                    self.change_state(GameState::Won);
                } else {
                    let countdown = self.config.wave_start_countdown_secs;
                    self.change_state(GameState::WaveStarting { countdown });
                }
            }
            _ => {
                self.warn(format!(
                    "ignoring next-wave request in {:?} state",
                    self.state.tag()
                ));
            }
        }
    }

    /// Update the viewport cell size and rederive every world position.
    pub fn set_cell_size(&mut self, size: f32) {
        if size <= 0.0 {
            self.warn(format!("ignoring invalid cell size {size}"));
            return;
        }
        self.cell_size = size;

        for (_entity, (grid, position)) in self.world.query_mut::<(&GridPos, &mut Position)>() {
            position.0 = grid.to_world(size);
        }
        let path = self.map.path();
        for (_entity, (progress, position)) in
            self.world.query_mut::<(&PathProgress, &mut Position)>()
        {
            position.0 = motion::world_position(progress, path, size);
        }
    }

    /// Reset everything and start a new game. The only way out of the
    /// terminal states.
    pub fn restart(&mut self) {
        self.change_state(GameState::Initializing);
    }

    // --- Command processing ---

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTower { kind, x, y } => {
                self.attempt_place_tower(kind, x, y);
            }
            PlayerCommand::RequestNextWave => self.request_next_wave(),
            PlayerCommand::SetCellSize { size } => self.set_cell_size(size),
            PlayerCommand::Restart => self.restart(),
        }
    }

    // --- State machine ---

    /// Apply a transition: run the old state's exit effects, install the
    /// new state, run its enter effects. Enter effects may demand an
    /// immediate follow-up transition (Initializing -> WaveStarting);
    /// the loop guarantees every exit/enter hook still runs exactly once.
    fn change_state(&mut self, next: GameState) {
        let mut next = next;
        loop {
            self.exit_state();
            self.state = next;
            match self.enter_state() {
                Some(follow) => next = follow,
                None => break,
            }
        }
    }

    fn exit_state(&mut self) {
        if let GameState::WaveCleared { .. } = self.state {
            self.wave_clear_message = None;
        }
    }

    fn enter_state(&mut self) -> Option<GameState> {
        match self.state {
            GameState::Initializing => {
                self.reset_game();
                Some(GameState::WaveStarting {
                    countdown: self.config.wave_start_countdown_secs,
                })
            }
            GameState::WaveStarting { countdown } => {
                self.wave += 1;
                if let Err(err) = self.scheduler.start_wave(self.wave) {
                    self.warn(format!("wave {} not started: {err}", self.wave));
                }
                if countdown <= 0.0 {
                    Some(GameState::Playing)
                } else {
                    None
                }
            }
            GameState::Playing => {
                self.audio_events.push(AudioEvent::WaveStart { wave: self.wave });
                None
            }
            GameState::WaveCleared { .. } => {
                self.wave_clear_message = Some(format!(
                    "Wave {} cleared! Ready for wave {}.",
                    self.wave,
                    self.wave + 1
                ));
                self.audio_events
                    .push(AudioEvent::WaveCleared { wave: self.wave });
                None
            }
            GameState::Won => {
                self.game_over = true;
                self.audio_events.push(AudioEvent::GameWon);
                None
            }
            GameState::Lost => {
                self.game_over = true;
                self.audio_events.push(AudioEvent::GameLost);
                None
            }
        }
    }

    /// Per-tick behavior of the current state. Applies at most one
    /// transition, then returns to the caller; the next scheduled tick
    /// sees the new state.
    fn update_state(&mut self, dt: f32) {
        let mut next: Option<GameState> = None;
        let mut advance_cleared = false;

        match &mut self.state {
            GameState::Initializing => {
                // Chains out during enter; never observed here.
            }
            GameState::WaveStarting { countdown } => {
                *countdown -= dt;
                if *countdown <= 0.0 {
                    next = Some(GameState::Playing);
                }
            }
            GameState::Playing => {
                self.scheduler.run(
                    &mut self.world,
                    dt,
                    self.map.path(),
                    self.cell_size,
                    &mut self.next_enemy_id,
                );

                if self.lives == 0 {
                    next = Some(GameState::Lost);
                } else if self.scheduler.check_wave_completion() {
                    if self.wave >= self.scheduler.wave_count() {
                        next = Some(GameState::Won);
                    } else {
                        next = Some(GameState::WaveCleared {
                            auto_timer: self.config.wave_cleared_auto_secs,
                        });
                    }
                }
            }
            GameState::WaveCleared { auto_timer } => {
                if let Some(timer) = auto_timer {
                    *timer -= dt;
                    if *timer <= 0.0 {
                        advance_cleared = true;
                    }
                }
            }
            GameState::Won | GameState::Lost => {}
        }

        if advance_cleared {
            // Same path as the player's button press.
            self.request_next_wave();
        }
        if let Some(next) = next {
            self.change_state(next);
        }
    }

    // --- Systems ---

    fn run_entity_systems(&mut self, dt: f32) {
        systems::movement::run(&mut self.world, self.map.path(), self.cell_size, dt);
        systems::tower_combat::run(
            &mut self.world,
            self.map.path(),
            self.cell_size,
            dt,
            &mut self.audio_events,
        );
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.scheduler,
            &mut self.economy,
            &mut self.lives,
            matches!(self.state, GameState::Playing),
            &mut self.audio_events,
        );
    }

    fn build_snapshot(&mut self) -> GameSnapshot {
        let audio_events = std::mem::take(&mut self.audio_events);
        let alerts = std::mem::take(&mut self.alerts);
        let countdown = match &self.state {
            GameState::WaveStarting { countdown } => countdown.max(0.0),
            _ => 0.0,
        };

        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.state.tag(),
            self.lives,
            self.economy.currency(),
            self.wave,
            self.scheduler.wave_count(),
            self.scheduler.status(),
            countdown,
            self.wave_clear_message.clone(),
            self.game_over,
            alerts,
            audio_events,
        )
    }

    // --- Internals ---

    /// Reinitialize counters and clear all entities. The map's static
    /// structure (grid, path) is left intact.
    fn reset_game(&mut self) {
        self.world.clear();
        self.scheduler.reset();
        self.economy.reset(self.config.starting_currency);
        self.lives = self.config.starting_lives;
        self.wave = 0;
        self.time = SimTime::default();
        self.next_enemy_id = 0;
        self.game_over = false;
        self.wave_clear_message = None;
        self.despawn_buffer.clear();
    }

    fn tower_at(&self, x: i32, y: i32) -> Option<Entity> {
        self.world
            .query::<(&Tower, &GridPos)>()
            .iter()
            .find(|(_, (_, grid))| grid.x == x && grid.y == y)
            .map(|(entity, _)| entity)
    }

    fn warn(&mut self, message: String) {
        self.alerts.push(Alert {
            level: AlertLevel::Warning,
            message,
            tick: self.time.tick,
        });
    }
}
