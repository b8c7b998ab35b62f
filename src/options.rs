//! Construction parameters for both carousel kinds.
//!
//! Every field is optional. Options load from JSON with camelCase keys;
//! fields left out take the documented defaults:
//!
//! Shared ([`CarouselOptions`]):
//! - `index`: controlled active index, unset for uncontrolled use
//! - `defaultIndex`: starting index when uncontrolled, default 0
//! - `dragEnabled`: default `true`
//! - `dragSensitivity`: pixels per unit of offset, default per kind
//! - `dragAxis`: `x` or `y`, default per kind
//! - `drag`: recognizer overrides, see [`DragConfig`]
//!
//! Ring ([`RingOptions`]): `radius` default 3, `axis` default `y`.
//!
//! Strip ([`StripOptions`]): `gap` default 0.5, `direction` default
//! `horizontal`, `infinite` default `false`.

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GAP, DEFAULT_RADIUS};
use crate::geometry::{Direction, RotationAxis};
use crate::input::{DragAxis, DragConfig};
use crate::ring::RingLayout;
use crate::strip::StripLayout;

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid options json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid option {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Options shared by the ring and the strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselOptions {
    pub index: Option<usize>,
    pub default_index: usize,
    pub drag_enabled: bool,
    pub drag_sensitivity: Option<f64>,
    pub drag_axis: Option<DragAxis>,
    pub drag: DragConfig,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            index: None,
            default_index: 0,
            drag_enabled: true,
            drag_sensitivity: None,
            drag_axis: None,
            drag: DragConfig::default(),
        }
    }
}

impl CarouselOptions {
    /// # Errors
    ///
    /// Returns [`OptionsError::Invalid`] for a non-finite or non-positive
    /// sensitivity or a negative or non-finite drag threshold.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if let Some(sensitivity) = self.drag_sensitivity {
            if !sensitivity.is_finite() || sensitivity <= 0.0 {
                return Err(invalid("dragSensitivity", format!("must be a positive number, got {sensitivity}")));
            }
        }
        if let Some(threshold) = self.drag.threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(invalid("drag.threshold", format!("must be zero or more, got {threshold}")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RingOptions {
    #[serde(flatten)]
    pub common: CarouselOptions,
    pub radius: f64,
    pub axis: RotationAxis,
}

impl Default for RingOptions {
    fn default() -> Self {
        Self { common: CarouselOptions::default(), radius: DEFAULT_RADIUS, axis: RotationAxis::default() }
    }
}

impl RingOptions {
    /// Parse and validate ring options.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError`] if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        parse(json, Self::validate)
    }

    /// # Errors
    ///
    /// Returns [`OptionsError::Invalid`] for a non-positive or non-finite radius,
    /// or any invalid shared option.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(invalid("radius", format!("must be a positive number, got {}", self.radius)));
        }
        self.common.validate()
    }

    #[must_use]
    pub fn layout(&self) -> RingLayout {
        RingLayout::new(self.radius, self.axis)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StripOptions {
    #[serde(flatten)]
    pub common: CarouselOptions,
    pub gap: f64,
    pub direction: Direction,
    pub infinite: bool,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self { common: CarouselOptions::default(), gap: DEFAULT_GAP, direction: Direction::default(), infinite: false }
    }
}

impl StripOptions {
    /// Parse and validate strip options.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError`] if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        parse(json, Self::validate)
    }

    /// # Errors
    ///
    /// Returns [`OptionsError::Invalid`] when items would overlap into a
    /// non-positive spacing (`gap <= -1`) or the gap is non-finite, or any
    /// shared option is invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !self.gap.is_finite() || self.gap <= -1.0 {
            return Err(invalid("gap", format!("must be greater than -1, got {}", self.gap)));
        }
        self.common.validate()
    }

    #[must_use]
    pub fn layout(&self) -> StripLayout {
        StripLayout::new(self.gap, self.direction, self.infinite)
    }
}

fn parse<T: DeserializeOwned>(json: &str, validate: fn(&T) -> Result<(), OptionsError>) -> Result<T, OptionsError> {
    let options: T = serde_json::from_str(json)?;
    validate(&options)?;
    Ok(options)
}

fn invalid(field: &'static str, reason: String) -> OptionsError {
    OptionsError::Invalid { field, reason }
}
