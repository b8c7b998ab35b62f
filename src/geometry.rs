//! Resting transforms for carousel items and the animated root node.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

use crate::consts::TAU;

/// A point or Euler rotation in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// A vector that is zero everywhere except `value` on `axis`.
    #[must_use]
    pub fn on_axis(axis: RotationAxis, value: f64) -> Self {
        match axis {
            RotationAxis::X => Self::new(value, 0.0, 0.0),
            RotationAxis::Y => Self::new(0.0, value, 0.0),
            RotationAxis::Z => Self::new(0.0, 0.0, value),
        }
    }
}

/// Position and Euler rotation of a scene node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self { position: Vec3::ZERO, rotation: Vec3::ZERO };

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self { position, rotation: Vec3::ZERO }
    }

    #[must_use]
    pub fn from_rotation(rotation: Vec3) -> Self {
        Self { position: Vec3::ZERO, rotation }
    }
}

/// Axis the ring rotates around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationAxis {
    X,
    #[default]
    Y,
    Z,
}

/// Direction the strip extends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

/// Angle between neighbouring ring items. A full turn when the ring is empty.
#[must_use]
pub fn angle_per_item(count: usize) -> f64 {
    if count == 0 { TAU } else { TAU / count as f64 }
}

/// Distance between neighbouring strip item rest positions.
#[must_use]
pub fn item_spacing(gap: f64) -> f64 {
    1.0 + gap
}

/// Resting transform of ring item `index` out of `count`.
///
/// The item sits on the circle of `radius` around `axis` and faces the
/// origin. An empty ring uses a full-turn step so the division is defined.
#[must_use]
pub fn ring_transform(index: usize, count: usize, radius: f64, axis: RotationAxis) -> Transform {
    let angle = index as f64 * angle_per_item(count);
    let c = angle.cos() * radius;
    let s = angle.sin() * radius;
    let position = match axis {
        RotationAxis::Y => Vec3::new(s, 0.0, c),
        RotationAxis::X => Vec3::new(0.0, c, s),
        RotationAxis::Z => Vec3::new(c, s, 0.0),
    };
    Transform { position, rotation: Vec3::on_axis(axis, std::f64::consts::PI + angle) }
}

/// Resting transform of strip item `index`.
#[must_use]
pub fn strip_transform(index: usize, gap: f64, direction: Direction) -> Transform {
    let offset = index as f64 * item_spacing(gap);
    let position = match direction {
        Direction::Horizontal => Vec3::new(offset, 0.0, 0.0),
        Direction::Vertical => Vec3::new(0.0, offset, 0.0),
    };
    Transform::from_position(position)
}

/// Root transform of a ring rotated by `offset` radians.
#[must_use]
pub fn ring_root_transform(offset: f64, axis: RotationAxis) -> Transform {
    Transform::from_rotation(Vec3::on_axis(axis, offset))
}

/// Root transform of a strip translated by `offset` scene units.
#[must_use]
pub fn strip_root_transform(offset: f64, direction: Direction) -> Transform {
    let position = match direction {
        Direction::Horizontal => Vec3::new(offset, 0.0, 0.0),
        Direction::Vertical => Vec3::new(0.0, offset, 0.0),
    };
    Transform::from_position(position)
}
