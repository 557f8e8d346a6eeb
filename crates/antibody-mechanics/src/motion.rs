//! Path-following motion in segment units.
//!
//! Each segment between consecutive waypoints is normalized to length 1.
//! Progress within a segment is the interpolant for position derivation.

use glam::Vec2;

use antibody_core::components::PathProgress;
use antibody_core::types::GridPos;

/// Advance along the path by `distance` segment units, carrying leftover
/// distance across segment boundaries (handles arbitrarily large steps
/// from a stalled frame). Returns true if the end was reached by this
/// call; the `reached_end` latch makes every later call a no-op.
pub fn advance(p: &mut PathProgress, waypoint_count: usize, distance: f32) -> bool {
    if p.reached_end {
        return false;
    }

    let mut remaining = distance;
    loop {
        if p.index + 1 >= waypoint_count {
            // At the final waypoint: snap and latch.
            p.progress = 1.0;
            p.reached_end = true;
            return true;
        }

        let segment_left = 1.0 - p.progress;
        if remaining < segment_left {
            p.progress += remaining;
            return false;
        }
        remaining -= segment_left;
        p.index += 1;
        p.progress = 0.0;
    }
}

/// Walk backward along the path by `distance` segment units, clamping at
/// the path start. No-op once the end has been reached.
pub fn push_back(p: &mut PathProgress, distance: f32) {
    if p.reached_end {
        return;
    }

    let mut remaining = distance;
    while remaining > 0.0 {
        if remaining <= p.progress {
            p.progress -= remaining;
            break;
        }
        remaining -= p.progress;
        if p.index == 0 {
            p.progress = 0.0;
            break;
        }
        p.index -= 1;
        p.progress = 1.0;
    }
    p.progress = p.progress.max(0.0);
}

/// Derive the world position for a path progress: linear interpolation
/// between the current waypoint and the next, at the given cell size.
/// The cell size may change at runtime, so it is applied fresh on every
/// derivation.
pub fn world_position(p: &PathProgress, path: &[GridPos], cell_size: f32) -> Vec2 {
    let Some(last) = path.last() else {
        return Vec2::ZERO;
    };
    if p.index + 1 >= path.len() {
        return last.to_world(cell_size);
    }
    let a = path[p.index].to_world(cell_size);
    let b = path[p.index + 1].to_world(cell_size);
    a.lerp(b, p.progress)
}
