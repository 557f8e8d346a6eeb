//! The game map: a fixed grid of tiles plus the enemy path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::GRID_SIZE;
use crate::types::GridPos;

/// A single tile on the map. Never both placeable and path.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Tile {
    pub placeable: bool,
    pub path: bool,
}

impl Tile {
    /// True if a tower may be constructed here.
    pub fn can_place_tower(&self) -> bool {
        self.placeable && !self.path
    }

    pub fn set_as_path(&mut self) {
        self.path = true;
        self.placeable = false;
    }

    pub fn set_as_placeable(&mut self) {
        self.placeable = true;
        self.path = false;
    }

    pub fn set_as_empty(&mut self) {
        self.placeable = false;
        self.path = false;
    }
}

/// Path validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("path cannot be empty")]
    EmptyPath,
    #[error("path waypoint ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },
    #[error("path waypoints {from:?} and {to:?} are not adjacent")]
    NotAdjacent { from: GridPos, to: GridPos },
}

/// Fixed-size tile grid plus the ordered waypoint sequence enemies follow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Map {
    width: usize,
    height: usize,
    /// Row-major tile storage.
    grid: Vec<Tile>,
    path: Vec<GridPos>,
}

impl Map {
    /// Create an empty map (no path, no placeable tiles).
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            grid: vec![Tile::default(); width * height],
            path: Vec::new(),
        }
    }

    /// The default 15x15 layout: the stock winding path, with every
    /// non-path tile placeable.
    pub fn with_default_layout() -> Self {
        let mut map = Self::new(GRID_SIZE, GRID_SIZE);
        let default_path = [
            (0, 1),
            (1, 1),
            (2, 1),
            (3, 1),
            (4, 1),
            (4, 2),
            (4, 3),
            (4, 4),
            (4, 5),
            (5, 5),
            (6, 5),
            (7, 5),
            (8, 5),
            (9, 5),
            (9, 6),
            (9, 7),
            (9, 8),
            (10, 8),
            (11, 8),
            (12, 8),
            (13, 8),
            (14, 8),
        ]
        .iter()
        .map(|&(x, y)| GridPos::new(x, y))
        .collect();

        map.set_path(default_path)
            .expect("default path layout is valid");
        map.make_non_path_placeable();
        map
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_valid_coordinate(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    pub fn tile_at(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.is_valid_coordinate(x, y) {
            Some(&self.grid[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    fn tile_at_mut(&mut self, pos: GridPos) -> Option<&mut Tile> {
        if self.is_valid_coordinate(pos.x, pos.y) {
            Some(&mut self.grid[pos.y as usize * self.width + pos.x as usize])
        } else {
            None
        }
    }

    /// True if the tile exists and allows tower placement. Occupancy by an
    /// already-placed tower is checked by the engine, not the map.
    pub fn can_place_tower_at(&self, x: i32, y: i32) -> bool {
        self.tile_at(x, y).is_some_and(|t| t.can_place_tower())
    }

    /// The ordered waypoint sequence enemies traverse.
    pub fn path(&self) -> &[GridPos] {
        &self.path
    }

    pub fn path_start(&self) -> Option<GridPos> {
        self.path.first().copied()
    }

    pub fn path_end(&self) -> Option<GridPos> {
        self.path.last().copied()
    }

    /// Validate a candidate path: non-empty, in bounds, and each
    /// consecutive pair of waypoints grid-adjacent.
    pub fn validate_path(&self, path: &[GridPos]) -> Result<(), MapError> {
        if path.is_empty() {
            return Err(MapError::EmptyPath);
        }
        for (i, wp) in path.iter().enumerate() {
            if !self.is_valid_coordinate(wp.x, wp.y) {
                return Err(MapError::OutOfBounds { x: wp.x, y: wp.y });
            }
            if i > 0 {
                let prev = path[i - 1];
                if prev.manhattan_distance(wp) != 1 {
                    return Err(MapError::NotAdjacent {
                        from: prev,
                        to: *wp,
                    });
                }
            }
        }
        Ok(())
    }

    /// Replace the enemy path. On validation failure the previous path is
    /// kept untouched. Old path tiles are reset to empty, new path tiles
    /// marked as path (and therefore unplaceable).
    pub fn set_path(&mut self, new_path: Vec<GridPos>) -> Result<(), MapError> {
        self.validate_path(&new_path)?;

        let old_path = std::mem::take(&mut self.path);
        for wp in &old_path {
            if let Some(tile) = self.tile_at_mut(*wp) {
                tile.set_as_empty();
            }
        }
        for wp in &new_path {
            if let Some(tile) = self.tile_at_mut(*wp) {
                tile.set_as_path();
            }
        }
        self.path = new_path;
        Ok(())
    }

    /// Mark every tile that is not part of the path as placeable.
    pub fn make_non_path_placeable(&mut self) {
        for tile in &mut self.grid {
            if !tile.path {
                tile.set_as_placeable();
            }
        }
    }
}
