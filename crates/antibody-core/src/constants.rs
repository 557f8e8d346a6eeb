//! Simulation constants and tuning parameters.

/// Target update cadence (Hz).
pub const TICK_RATE: u32 = 60;

/// Upper bound on a single update's delta time (seconds).
/// Protects against instability after a stall in the driver loop.
pub const MAX_DT: f32 = 0.1;

// --- Grid and map ---

/// Default grid size (width and height, tiles).
pub const GRID_SIZE: usize = 15;

/// Default size of a tile in world units. The viewport may override this
/// at runtime via `SetCellSize`.
pub const DEFAULT_CELL_SIZE: f32 = 50.0;

// --- Game rules ---

/// Enemies that may reach the end before the game is lost.
pub const STARTING_LIVES: u32 = 3;

/// Starting currency for the player.
pub const STARTING_CURRENCY: u32 = 100;

/// Waves to clear to win the game.
pub const WAVES_TO_WIN: u32 = 3;

/// Countdown before a wave's spawning begins (seconds).
pub const WAVE_START_COUNTDOWN_SECS: f32 = 3.0;

// --- Towers ---

/// Duration a tower's attack visual stays active (seconds). The tower's
/// displayed target is held for this window after an attack.
pub const ATTACK_EFFECT_DURATION: f32 = 0.15;

/// Base damage per attack, scaled by the strategy multiplier.
pub const TOWER_BASE_DAMAGE: f32 = 10.0;

/// Default attack range in world units (3 tiles at the default cell size).
pub const TOWER_RANGE: f32 = 150.0;

/// Mucus tower: cost, attack rate, slow tuning.
pub const MUCUS_COST: u32 = 10;
pub const MUCUS_ATTACK_RATE: f32 = 1.0;
pub const MUCUS_SLOW_FACTOR: f32 = 0.5;
pub const MUCUS_SLOW_DURATION_SECS: f32 = 2.0;

/// Macrophage tower: cost, attack rate, damage multiplier.
pub const MACROPHAGE_COST: u32 = 20;
pub const MACROPHAGE_ATTACK_RATE: f32 = 0.5;
pub const MACROPHAGE_DAMAGE_MULTIPLIER: f32 = 2.5;

/// Cough tower: cost, attack rate, push distance (path segments).
pub const COUGH_COST: u32 = 10;
pub const COUGH_ATTACK_RATE: f32 = 1.0;
pub const COUGH_PUSH_DISTANCE: f32 = 1.0;
pub const COUGH_DAMAGE_MULTIPLIER: f32 = 0.5;

// --- Enemies ---

/// Virus: health, speed (tiles/sec), reward.
pub const VIRUS_HEALTH: f32 = 50.0;
pub const VIRUS_SPEED: f32 = 1.5;
pub const VIRUS_REWARD: u32 = 10;

/// Bacteria: health, speed, reward.
pub const BACTERIA_HEALTH: f32 = 100.0;
pub const BACTERIA_SPEED: f32 = 1.0;
pub const BACTERIA_REWARD: u32 = 20;

/// Fine particle: health, speed, reward.
pub const FINE_PARTICLE_HEALTH: f32 = 30.0;
pub const FINE_PARTICLE_SPEED: f32 = 1.0;
pub const FINE_PARTICLE_REWARD: u32 = 5;
