//! Shared numeric constants for the carousel crate.

use crate::spring::SpringConfig;

// ── Math ────────────────────────────────────────────────────────

/// One full turn in radians.
pub const TAU: f64 = std::f64::consts::TAU;

// ── Ring layout ─────────────────────────────────────────────────

/// Default ring radius in scene units.
pub const DEFAULT_RADIUS: f64 = 3.0;

/// Pixels of pointer travel per radian are `280 / angle_per_item`, so one
/// item's worth of rotation always costs 280 pixels regardless of count.
pub const DEFAULT_RING_SENSITIVITY_FACTOR: f64 = 280.0;

// ── Strip layout ────────────────────────────────────────────────

/// Default gap between strip items, in item widths.
pub const DEFAULT_GAP: f64 = 0.5;

/// Default strip drag sensitivity in pixels per scene unit.
pub const DEFAULT_STRIP_SENSITIVITY: f64 = 150.0;

// ── Gestures ────────────────────────────────────────────────────

/// Pixels of travel before the host recognizer reports a drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 5.0;

/// Touch-action applied to the drag surface while drag is enabled.
pub const DRAG_TOUCH_ACTION: &str = "none";

/// Cursor shown over the surface while drag is enabled.
pub const CURSOR_GRAB: &str = "grab";

/// Cursor shown while a gesture is in progress.
pub const CURSOR_GRABBING: &str = "grabbing";

// ── Animation ───────────────────────────────────────────────────

/// Profile used when moving to a confirmed resting position.
pub const SETTLE_SPRING: SpringConfig = SpringConfig { tension: 200.0, friction: 25.0 };

/// Profile used while the item is held under the pointer.
pub const DRAG_SPRING: SpringConfig = SpringConfig { tension: 400.0, friction: 50.0 };

/// Distance and velocity below which a spring snaps to its target.
pub const SPRING_PRECISION: f64 = 1e-4;

/// Integration step for the spring, in seconds.
pub const SPRING_STEP_SECS: f64 = 0.001;
