//! Shortest-path targets on the periodic ring domain.
//!
//! Ring offsets are angles, so every logical target has an equivalent one in
//! each full turn. Picking the equivalent nearest the current offset keeps the
//! settle animation under half a turn and avoids spinning through whole
//! revolutions after the offset has drifted across several turns.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use crate::consts::TAU;

/// The equivalent of `target_logical` closest to `current_offset`.
#[must_use]
pub fn shortest_path(current_offset: f64, target_logical: f64) -> f64 {
    let turns = ((current_offset - target_logical) / TAU).round();
    target_logical + turns * TAU
}

/// Whether a ring offset has never moved off its initial value.
///
/// A cached offset of exactly zero while the active index is non-zero means
/// the spring has not been driven yet. Resolving shortest path from that
/// false origin would pick the wrong turn, so callers jump to the raw logical
/// target instead.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_stale(current_offset: f64, active_index: usize) -> bool {
    current_offset == 0.0 && active_index != 0
}

/// Ring settle target for `active_index` from `current_offset`.
#[must_use]
pub fn resolve_ring_target(current_offset: f64, target_logical: f64, active_index: usize) -> f64 {
    if is_stale(current_offset, active_index) {
        target_logical
    } else {
        shortest_path(current_offset, target_logical)
    }
}
