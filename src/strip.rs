//! Strip layout: items along a line, wrapping only when infinite.
//!
//! The offset is the translation of the strip's root node along its
//! direction. Item `i` rests at the origin when the offset is
//! `-i * (1 + gap)`.

#[cfg(test)]
#[path = "strip_test.rs"]
mod strip_test;

use crate::consts::{DEFAULT_GAP, DEFAULT_STRIP_SENSITIVITY};
use crate::context::CarouselKind;
use crate::controller::WrapMode;
use crate::geometry::{Direction, Transform, item_spacing, strip_root_transform, strip_transform};
use crate::input::DragAxis;
use crate::policy::{NavigationPolicy, constrain_to_neighbors, resolve_index, round_index};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub gap: f64,
    pub direction: Direction,
    pub infinite: bool,
}

impl Default for StripLayout {
    fn default() -> Self {
        Self { gap: DEFAULT_GAP, direction: Direction::default(), infinite: false }
    }
}

impl StripLayout {
    #[must_use]
    pub fn new(gap: f64, direction: Direction, infinite: bool) -> Self {
        Self { gap, direction, infinite }
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        item_spacing(self.gap)
    }

    fn nearest_raw(&self, offset: f64) -> Option<i64> {
        round_index(-offset / self.spacing())
    }
}

impl NavigationPolicy for StripLayout {
    fn kind(&self) -> CarouselKind {
        CarouselKind::Linear
    }

    fn wrap_mode(&self) -> WrapMode {
        if self.infinite { WrapMode::Infinite } else { WrapMode::Bounded }
    }

    fn drag_axis(&self) -> DragAxis {
        match self.direction {
            Direction::Horizontal => DragAxis::X,
            Direction::Vertical => DragAxis::Y,
        }
    }

    fn default_sensitivity(&self, _count: usize) -> f64 {
        DEFAULT_STRIP_SENSITIVITY
    }

    fn max_drag(&self, _count: usize) -> f64 {
        self.spacing()
    }

    fn index_from_offset(&self, offset: f64, count: usize) -> Option<usize> {
        resolve_index(self.nearest_raw(offset)?, count, self.infinite)
    }

    fn target_index_from_drag(
        &self,
        current_offset: f64,
        start_index: usize,
        drag_delta: f64,
        count: usize,
    ) -> Option<usize> {
        let raw = self.nearest_raw(current_offset)?;
        let constrained = constrain_to_neighbors(raw, start_index, drag_delta, count, self.infinite);
        resolve_index(constrained, count, self.infinite)
    }

    fn target_offset(&self, index: usize, _current_offset: f64, _count: usize) -> f64 {
        -(index as f64) * self.spacing()
    }

    fn item_transform(&self, index: usize, _count: usize) -> Transform {
        strip_transform(index, self.gap, self.direction)
    }

    fn root_transform(&self, offset: f64) -> Transform {
        strip_root_transform(offset, self.direction)
    }
}
