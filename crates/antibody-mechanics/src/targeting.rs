//! Tower target selection.

use glam::Vec2;

/// Snapshot of one enemy taken at the start of the combat pass.
#[derive(Debug, Clone, Copy)]
pub struct TargetCandidate {
    pub id: u32,
    pub position: Vec2,
    /// `path_index + progress`; larger means further along the path.
    pub path_key: f32,
    /// Dead or already finished: never targetable.
    pub gone: bool,
}

/// Squared-distance range test (avoids the square root).
pub fn in_range(tower_pos: Vec2, enemy_pos: Vec2, range: f32) -> bool {
    tower_pos.distance_squared(enemy_pos) <= range * range
}

/// Pick the live in-range candidate furthest along the path (closest to
/// breaching). Returns the index into `candidates`. Ties fall to the
/// later entry; callers treat tie order as unspecified.
pub fn select_target(
    tower_pos: Vec2,
    range: f32,
    candidates: &[TargetCandidate],
) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.gone && in_range(tower_pos, c.position, range))
        .max_by(|(_, a), (_, b)| a.path_key.total_cmp(&b.path_key))
        .map(|(i, _)| i)
}
