//! Ring layout: items evenly spaced on a circle, always wrapping.
//!
//! The offset is the rotation of the ring's root node in radians. Item `i`
//! rests in front when the offset is `-(i / count) * TAU` plus any whole
//! number of turns.

#[cfg(test)]
#[path = "ring_test.rs"]
mod ring_test;

use crate::consts::{DEFAULT_RADIUS, DEFAULT_RING_SENSITIVITY_FACTOR, TAU};
use crate::context::CarouselKind;
use crate::controller::WrapMode;
use crate::geometry::{RotationAxis, Transform, angle_per_item, ring_root_transform, ring_transform};
use crate::input::DragAxis;
use crate::path::{resolve_ring_target, shortest_path};
use crate::policy::{NavigationPolicy, constrain_to_neighbors, resolve_index, round_index};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub radius: f64,
    pub axis: RotationAxis,
    pub drag_axis: DragAxis,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self { radius: DEFAULT_RADIUS, axis: RotationAxis::default(), drag_axis: DragAxis::X }
    }
}

impl RingLayout {
    #[must_use]
    pub fn new(radius: f64, axis: RotationAxis) -> Self {
        Self { radius, axis, ..Self::default() }
    }

    /// Offset at which `index` faces front, before shortest-path adjustment.
    #[must_use]
    pub fn logical_offset(index: usize, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        -(index as f64 / count as f64) * TAU
    }

    fn nearest_raw(offset: f64, count: usize) -> Option<i64> {
        if count == 0 {
            return None;
        }
        round_index((-offset / TAU) * count as f64)
    }
}

impl NavigationPolicy for RingLayout {
    fn kind(&self) -> CarouselKind {
        CarouselKind::Circular
    }

    fn wrap_mode(&self) -> WrapMode {
        WrapMode::Ring
    }

    fn drag_axis(&self) -> DragAxis {
        self.drag_axis
    }

    fn default_sensitivity(&self, count: usize) -> f64 {
        DEFAULT_RING_SENSITIVITY_FACTOR / angle_per_item(count)
    }

    fn max_drag(&self, count: usize) -> f64 {
        angle_per_item(count)
    }

    fn index_from_offset(&self, offset: f64, count: usize) -> Option<usize> {
        let raw = Self::nearest_raw(offset, count)?;
        resolve_index(raw, count, true)
    }

    fn target_index_from_drag(
        &self,
        current_offset: f64,
        start_index: usize,
        drag_delta: f64,
        count: usize,
    ) -> Option<usize> {
        let raw = Self::nearest_raw(current_offset, count)?;
        let constrained = constrain_to_neighbors(raw, start_index, drag_delta, count, true);
        resolve_index(constrained, count, true)
    }

    fn target_offset(&self, index: usize, current_offset: f64, count: usize) -> f64 {
        shortest_path(current_offset, Self::logical_offset(index, count))
    }

    fn sync_offset(&self, index: usize, current_offset: f64, count: usize) -> f64 {
        resolve_ring_target(current_offset, Self::logical_offset(index, count), index)
    }

    fn item_transform(&self, index: usize, count: usize) -> Transform {
        ring_transform(index, count, self.radius, self.axis)
    }

    fn root_transform(&self, offset: f64) -> Transform {
        ring_root_transform(offset, self.axis)
    }
}
