//! Animated scalar contract and the default damped spring.
//!
//! The carousel never writes its offset directly. It asks an [`Animator`] to
//! head for a target under a damping profile and samples the animated value
//! once per frame. Hosts with their own animation system implement
//! [`Animator`]; everyone else uses [`Spring`].

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

use serde::{Deserialize, Serialize};

use crate::consts::{SPRING_PRECISION, SPRING_STEP_SECS};

/// Damping profile for a spring with unit mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    /// Stiffness pulling the value toward the target.
    pub tension: f64,
    /// Resistance proportional to velocity.
    pub friction: f64,
}

/// A scalar animated toward a target over successive frames.
pub trait Animator {
    /// Retarget the animation. The current value and velocity carry over.
    fn start(&mut self, target: f64, config: SpringConfig);

    /// The current animated value.
    fn get(&self) -> f64;

    /// The value the animation is heading for.
    fn target(&self) -> f64;

    /// Advance the animation by `dt_secs` seconds.
    fn advance(&mut self, dt_secs: f64);

    /// Whether the value has settled on its target.
    fn is_idle(&self) -> bool;
}

/// Unit-mass damped spring integrated with fixed sub-steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Spring {
    /// A spring resting at `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value, velocity: 0.0, target: value, config: crate::consts::SETTLE_SPRING }
    }

    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[must_use]
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    fn step(&mut self, dt: f64) {
        let force = -self.config.tension * (self.value - self.target) - self.config.friction * self.velocity;
        self.velocity += force * dt;
        self.value += self.velocity * dt;
        if (self.value - self.target).abs() < SPRING_PRECISION && self.velocity.abs() < SPRING_PRECISION {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }
}

impl Animator for Spring {
    fn start(&mut self, target: f64, config: SpringConfig) {
        if !target.is_finite() {
            tracing::warn!(target, "spring: ignoring non-finite target");
            return;
        }
        self.target = target;
        self.config = config;
    }

    fn get(&self) -> f64 {
        self.value
    }

    fn target(&self) -> f64 {
        self.target
    }

    fn advance(&mut self, dt_secs: f64) {
        if !dt_secs.is_finite() || dt_secs <= 0.0 || self.is_idle() {
            return;
        }
        let mut remaining = dt_secs;
        while remaining > 0.0 && !self.is_idle() {
            let dt = remaining.min(SPRING_STEP_SECS);
            self.step(dt);
            remaining -= dt;
        }
    }

    #[allow(clippy::float_cmp)]
    fn is_idle(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }
}
