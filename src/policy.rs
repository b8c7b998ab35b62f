//! Strategy each carousel kind supplies to the shared drag engine.
//!
//! The drag engine and index controller know nothing about rings or strips.
//! They ask a [`NavigationPolicy`] how offsets map to indices, how far one
//! gesture may travel, and where a given index rests. [`crate::ring::RingLayout`]
//! and [`crate::strip::StripLayout`] are the two implementations.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::context::CarouselKind;
use crate::controller::WrapMode;
use crate::geometry::Transform;
use crate::input::DragAxis;

/// Layout and index arithmetic for one carousel kind.
pub trait NavigationPolicy {
    /// Which widget this policy lays out.
    fn kind(&self) -> CarouselKind;

    /// How indices behave at the ends of the sequence.
    fn wrap_mode(&self) -> WrapMode;

    /// Screen axis drags are read from when not overridden.
    fn drag_axis(&self) -> DragAxis;

    /// Pixels of pointer travel per unit of offset when not overridden.
    fn default_sensitivity(&self, count: usize) -> f64;

    /// Largest offset change a single gesture may produce: one item spacing.
    fn max_drag(&self, count: usize) -> f64;

    /// The item resting nearest `offset`, or `None` when there are no items.
    fn index_from_offset(&self, offset: f64, count: usize) -> Option<usize>;

    /// The index a released gesture resolves to.
    ///
    /// `current_offset` is `start_offset + drag_delta`. The result is at most
    /// one position away from `start_index` and already wrapped or clamped
    /// into `[0, count)`. `None` when no finite index exists.
    fn target_index_from_drag(
        &self,
        current_offset: f64,
        start_index: usize,
        drag_delta: f64,
        count: usize,
    ) -> Option<usize>;

    /// Resting offset for `index`, chosen relative to `current_offset`.
    fn target_offset(&self, index: usize, current_offset: f64, count: usize) -> f64;

    /// Resting offset for an index change that did not come from a gesture.
    fn sync_offset(&self, index: usize, current_offset: f64, count: usize) -> f64 {
        self.target_offset(index, current_offset, count)
    }

    /// Resting transform of item `index` relative to the root node.
    fn item_transform(&self, index: usize, count: usize) -> Transform;

    /// Transform of the root node for the animated `offset`.
    fn root_transform(&self, offset: f64) -> Transform;
}

/// Round a continuous index estimate, rejecting non-finite or out-of-range values.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_index(value: f64) -> Option<i64> {
    let rounded = value.round();
    // i64::MAX is not exactly representable; stay well inside it.
    if !rounded.is_finite() || rounded.abs() >= 9.0e18 {
        return None;
    }
    Some(rounded as i64)
}

/// Keep a released gesture within one position of where it started.
///
/// `raw` is the nearest index to the release offset. If it is not the start
/// index or one of its neighbours (mod `count` when `wraps`), fall back to the
/// neighbour in the direction of `delta`, or the start index when `delta` is
/// zero.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn constrain_to_neighbors(raw: i64, start: usize, delta: f64, count: usize, wraps: bool) -> i64 {
    let start = start as i64;
    let (prev, next, candidate) = if wraps && count > 0 {
        let n = count as i64;
        ((start - 1).rem_euclid(n), (start + 1).rem_euclid(n), raw.rem_euclid(n))
    } else {
        (start - 1, start + 1, raw)
    };
    if candidate == prev || candidate == start || candidate == next {
        return candidate;
    }
    if delta > 0.0 {
        next
    } else if delta < 0.0 {
        prev
    } else {
        start
    }
}

/// Wrap or clamp `index` into `[0, count)`. `None` when `count` is zero.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn resolve_index(index: i64, count: usize, wraps: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let n = count as i64;
    let resolved = if wraps { index.rem_euclid(n) } else { index.clamp(0, n - 1) };
    Some(resolved as usize)
}
