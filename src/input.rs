//! Gesture input model: drag configuration, recognizer updates, and the drag
//! session tracked between gesture start and gesture end.
//!
//! Pointer recognition itself belongs to the host. The host builds its
//! recognizer from [`GestureOptions`] and forwards each recognized movement
//! as a [`GestureUpdate`]. [`DragState`] is the state the drag engine keeps
//! between those updates.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DRAG_THRESHOLD_PX, DRAG_TOUCH_ACTION};

/// Screen axis a drag is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragAxis {
    #[default]
    X,
    Y,
}

/// Pointer sources the recognizer listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerOptions {
    /// Listen to touch events as well as pointer events.
    pub touch: bool,
    /// Capture the pointer for the duration of the gesture.
    pub capture: bool,
    /// Allow arrow keys to drive the gesture.
    pub keys: bool,
}

impl Default for PointerOptions {
    fn default() -> Self {
        Self { touch: true, capture: true, keys: true }
    }
}

/// Resistance applied when dragging past bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rubberband {
    Enabled(bool),
    Factor(f64),
}

impl Default for Rubberband {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

/// Optional overrides for the drag recognizer. Unset fields take defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragConfig {
    pub axis: Option<DragAxis>,
    pub pointer: Option<PointerOptions>,
    pub touch_action: Option<String>,
    pub threshold: Option<f64>,
    pub rubberband: Option<Rubberband>,
    pub filter_taps: Option<bool>,
}

impl DragConfig {
    /// Fill unset fields with defaults for a carousel dragging along `axis`.
    #[must_use]
    pub fn resolve(&self, enabled: bool, axis: DragAxis) -> GestureOptions {
        GestureOptions {
            enabled,
            axis: self.axis.unwrap_or(axis),
            pointer: self.pointer.unwrap_or_default(),
            touch_action: self.touch_action.clone().unwrap_or_else(|| DRAG_TOUCH_ACTION.to_owned()),
            threshold: self.threshold.unwrap_or(DEFAULT_DRAG_THRESHOLD_PX),
            rubberband: self.rubberband.unwrap_or_default(),
            filter_taps: self.filter_taps.unwrap_or(true),
        }
    }
}

/// Fully resolved recognizer configuration handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureOptions {
    pub enabled: bool,
    pub axis: DragAxis,
    pub pointer: PointerOptions,
    pub touch_action: String,
    pub threshold: f64,
    pub rubberband: Rubberband,
    pub filter_taps: bool,
}

/// One update from the host's drag recognizer.
///
/// `movement` is the pointer travel in pixels since the gesture started.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureUpdate {
    /// The pointer is still down.
    pub active: bool,
    /// Total travel since gesture start, `[x, y]`.
    pub movement: [f64; 2],
    /// First update of the gesture.
    pub first: bool,
    /// Last update of the gesture.
    pub last: bool,
    /// Pointer id of the underlying event, when the source has one.
    pub pointer_id: Option<i32>,
}

impl GestureUpdate {
    /// Opening update of a gesture with no travel yet.
    #[must_use]
    pub fn start(pointer_id: Option<i32>) -> Self {
        Self { active: true, movement: [0.0, 0.0], first: true, last: false, pointer_id }
    }

    /// Mid-gesture update with total travel `movement`.
    #[must_use]
    pub fn moved(movement: [f64; 2], pointer_id: Option<i32>) -> Self {
        Self { active: true, movement, first: false, last: false, pointer_id }
    }

    /// Closing update with total travel `movement`.
    #[must_use]
    pub fn end(movement: [f64; 2], pointer_id: Option<i32>) -> Self {
        Self { active: false, movement, first: false, last: true, pointer_id }
    }

    /// Travel along `axis`.
    #[must_use]
    pub fn movement_along(&self, axis: DragAxis) -> f64 {
        match axis {
            DragAxis::X => self.movement[0],
            DragAxis::Y => self.movement[1],
        }
    }
}

/// Context captured when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Settled or in-flight offset at gesture start.
    pub start_offset: f64,
    /// Item nearest `start_offset`.
    pub start_index: usize,
    /// Pointer captured at gesture start, released when the gesture ends.
    pub pointer_id: Option<i32>,
}

/// State of the drag engine between gesture updates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A pointer is down and moving the carousel.
    Dragging(DragSession),
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(*session),
        }
    }
}
