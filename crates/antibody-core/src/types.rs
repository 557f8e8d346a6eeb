//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A tile coordinate on the game grid. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

/// Simulation time tracking.
///
/// `tick` increments once per engine update and doubles as the change
/// counter the presentation layer polls to detect new state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another grid position.
    pub fn manhattan_distance(&self, other: &GridPos) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// World coordinate of the tile center at the given cell size.
    ///
    /// The cell size comes from the viewport and may change at runtime,
    /// so callers must pass the current value on every conversion.
    pub fn to_world(self, cell_size: f32) -> Vec2 {
        Vec2::new(
            self.x as f32 * cell_size + cell_size / 2.0,
            self.y as f32 * cell_size + cell_size / 2.0,
        )
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
