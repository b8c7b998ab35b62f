//! Drag-to-index state machine shared by both carousel kinds.
//!
//! `Idle -> Dragging -> Idle`. A gesture start captures the current offset
//! and the item nearest to it. Each update converts pointer travel into an
//! offset delta bounded to one item spacing and drives the animator with the
//! in-hand profile. The release resolves an index through the
//! [`NavigationPolicy`], never more than one position from the start, and
//! hands it back to the carousel to commit. A release with no usable index
//! animates back to where the gesture started.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::{CURSOR_GRAB, CURSOR_GRABBING, DRAG_SPRING, DRAG_TOUCH_ACTION, SETTLE_SPRING};
use crate::input::{DragAxis, DragSession, DragState, GestureUpdate};
use crate::policy::NavigationPolicy;
use crate::spring::Animator;
use crate::surface::{PointerSurface, SurfaceStyle, release_quietly};

/// What a gesture update did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Drag is disabled; the update was dropped.
    Ignored,
    /// The gesture is in progress and the offset is heading for `target`.
    Dragging { target: f64 },
    /// The gesture ended on `index`, released at `offset`. The caller commits
    /// the index and settles the offset.
    Commit { index: usize, offset: f64 },
    /// The gesture ended without a usable index and is animating back to `offset`.
    Revert { offset: f64 },
}

/// Gesture tracking for one carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEngine {
    state: DragState,
    enabled: bool,
    sensitivity: Option<f64>,
    axis: Option<DragAxis>,
    current_offset: f64,
    saved_style: Option<SurfaceStyle>,
}

impl Default for DragEngine {
    fn default() -> Self {
        Self::new(true, None, None)
    }
}

impl DragEngine {
    /// `sensitivity` and `axis` override the policy defaults when set.
    #[must_use]
    pub fn new(enabled: bool, sensitivity: Option<f64>, axis: Option<DragAxis>) -> Self {
        Self { state: DragState::Idle, enabled, sensitivity, axis, current_offset: 0.0, saved_style: None }
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Offset sampled from the animator on the last frame.
    #[must_use]
    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    /// Cache the animated offset. Called once per frame so gesture math
    /// reads a consistent value instead of racing the animation.
    pub fn sample(&mut self, offset: f64) {
        if offset.is_finite() {
            self.current_offset = offset;
        }
    }

    #[must_use]
    pub fn axis<P: NavigationPolicy + ?Sized>(&self, policy: &P) -> DragAxis {
        self.axis.unwrap_or_else(|| policy.drag_axis())
    }

    #[must_use]
    pub fn sensitivity<P: NavigationPolicy + ?Sized>(&self, policy: &P, count: usize) -> f64 {
        self.sensitivity.unwrap_or_else(|| policy.default_sensitivity(count))
    }

    /// Offset delta for `update`, bounded to one item spacing either way.
    #[must_use]
    pub fn drag_delta<P: NavigationPolicy + ?Sized>(&self, update: &GestureUpdate, policy: &P, count: usize) -> f64 {
        let movement = update.movement_along(self.axis(policy));
        let raw = movement / self.sensitivity(policy, count);
        if !raw.is_finite() {
            return 0.0;
        }
        let max = policy.max_drag(count);
        raw.clamp(-max, max)
    }

    /// Apply drag affordances to `surface`, remembering what they replace.
    pub fn attach(&mut self, surface: &mut dyn PointerSurface) {
        if !self.enabled || self.saved_style.is_some() {
            return;
        }
        self.saved_style = Some(surface.style());
        surface.set_style(SurfaceStyle {
            cursor: Some(CURSOR_GRAB.to_owned()),
            touch_action: Some(DRAG_TOUCH_ACTION.to_owned()),
        });
    }

    /// Stop handling gestures: end any gesture in progress, releasing its
    /// pointer, and restore the styles `attach` replaced. Handling resumes
    /// with `set_enabled(true)`.
    pub fn detach(&mut self, surface: &mut dyn PointerSurface) {
        self.abandon(surface);
        if let Some(saved) = self.saved_style.take() {
            surface.set_style(saved);
        }
        self.enabled = false;
    }

    /// Turn gesture handling on or off, updating the surface to match.
    pub fn set_enabled(&mut self, enabled: bool, surface: &mut dyn PointerSurface) {
        if self.enabled == enabled {
            return;
        }
        if enabled {
            self.enabled = true;
            self.attach(surface);
        } else {
            self.detach(surface);
        }
    }

    /// Feed one recognizer update through the state machine.
    pub fn update<P: NavigationPolicy + ?Sized>(
        &mut self,
        update: &GestureUpdate,
        policy: &P,
        count: usize,
        animator: &mut dyn Animator,
        surface: &mut dyn PointerSurface,
    ) -> DragOutcome {
        if !self.enabled {
            return DragOutcome::Ignored;
        }

        let session = match self.state {
            DragState::Dragging(session) if !update.first => session,
            _ => self.begin(policy, count, update.pointer_id),
        };

        if update.active && update.first {
            if let Some(pointer_id) = update.pointer_id {
                if let Err(err) = surface.set_pointer_capture(pointer_id) {
                    tracing::warn!(pointer_id, error = %err, "drag: pointer capture failed");
                }
            }
            surface.set_cursor(CURSOR_GRABBING);
        }
        if !update.active && update.last {
            if let Some(pointer_id) = update.pointer_id {
                release_quietly(surface, pointer_id);
            }
            surface.set_cursor(CURSOR_GRAB);
        }

        let delta = self.drag_delta(update, policy, count);

        if update.active {
            self.state = DragState::Dragging(session);
            let target = session.start_offset + delta;
            tracing::trace!(delta, target, "drag: update");
            animator.start(target, DRAG_SPRING);
            return DragOutcome::Dragging { target };
        }

        self.state = DragState::Idle;
        let offset = session.start_offset + delta;
        let index =
            if count == 0 { None } else { policy.target_index_from_drag(offset, session.start_index, delta, count) };

        match index {
            Some(index) => {
                tracing::debug!(index, start_index = session.start_index, delta, "drag: released");
                DragOutcome::Commit { index, offset }
            }
            None => {
                tracing::debug!(count, offset, "drag: no target index; reverting");
                animator.start(session.start_offset, SETTLE_SPRING);
                DragOutcome::Revert { offset: session.start_offset }
            }
        }
    }

    fn begin<P: NavigationPolicy + ?Sized>(&self, policy: &P, count: usize, pointer_id: Option<i32>) -> DragSession {
        let start_offset = self.current_offset;
        let start_index = policy.index_from_offset(start_offset, count).unwrap_or(0);
        tracing::debug!(start_offset, start_index, "drag: started");
        DragSession { start_offset, start_index, pointer_id }
    }

    /// Drop a gesture that will not see its release update.
    fn abandon(&mut self, surface: &mut dyn PointerSurface) {
        let DragState::Dragging(session) = self.state else {
            return;
        };
        self.state = DragState::Idle;
        if let Some(pointer_id) = session.pointer_id {
            release_quietly(surface, pointer_id);
        }
        tracing::debug!(start_index = session.start_index, "drag: abandoned");
    }
}
