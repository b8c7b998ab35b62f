//! Carousel widgets: the index controller, drag engine and layout policy
//! wired to an animator and a pointer surface.
//!
//! The host drives a carousel with three calls:
//!
//! - [`Carousel::render`] each time its children change, to get positioned items
//! - [`Carousel::frame`] once per animation frame, to advance and sample the offset
//! - [`Carousel::on_gesture`] for every update from its drag recognizer
//!
//! Navigation (`next`, `prev`, `go_to`, triggers) can happen at any time in
//! between. Every index change notifies the listener first and then starts
//! the settle animation.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::consts::SETTLE_SPRING;
use crate::context::{CarouselKind, ContextError, Navigate, Scope, Trigger};
use crate::controller::{IndexController, Navigation};
use crate::drag::{DragEngine, DragOutcome};
use crate::geometry::Transform;
use crate::input::{DragConfig, DragState, GestureOptions, GestureUpdate};
use crate::options::{CarouselOptions, RingOptions, StripOptions};
use crate::policy::NavigationPolicy;
use crate::ring::RingLayout;
use crate::scene::{Child, Scene, SceneNode, partition};
use crate::spring::{Animator, Spring};
use crate::strip::StripLayout;
use crate::surface::{NullSurface, PointerSurface};

/// Items evenly spaced on a rotating ring.
pub type CircularCarousel<A = Spring, S = NullSurface> = Carousel<RingLayout, A, S>;

/// Items in a line, optionally wrapping.
pub type LinearCarousel<A = Spring, S = NullSurface> = Carousel<StripLayout, A, S>;

#[derive(Debug)]
pub struct Carousel<P, A = Spring, S = NullSurface> {
    policy: P,
    controller: IndexController,
    drag: DragEngine,
    drag_config: DragConfig,
    animator: A,
    surface: S,
}

impl CircularCarousel {
    /// A ring with the default spring and a headless surface.
    #[must_use]
    pub fn new(options: &RingOptions) -> Self {
        Self::from_parts(options.layout(), &options.common, Spring::default(), NullSurface::new())
    }
}

impl LinearCarousel {
    /// A strip with the default spring and a headless surface.
    #[must_use]
    pub fn new(options: &StripOptions) -> Self {
        Self::from_parts(options.layout(), &options.common, Spring::default(), NullSurface::new())
    }
}

impl<P: NavigationPolicy, A: Animator, S: PointerSurface> Carousel<P, A, S> {
    /// Assemble a carousel from a layout policy and host-provided parts.
    ///
    /// Drag affordances are applied to `surface` immediately when drag is enabled.
    pub fn from_parts(policy: P, options: &CarouselOptions, animator: A, mut surface: S) -> Self {
        let controller = IndexController::new(policy.wrap_mode(), options.default_index, options.index);
        let mut drag = DragEngine::new(options.drag_enabled, options.drag_sensitivity, options.drag_axis);
        drag.sample(animator.get());
        drag.attach(&mut surface);
        Self { policy, controller, drag, drag_config: options.drag.clone(), animator, surface }
    }

    // ── Accessors ───────────────────────────────────────────────

    #[must_use]
    pub fn kind(&self) -> CarouselKind {
        self.policy.kind()
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    #[must_use]
    pub fn animator(&self) -> &A {
        &self.animator
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Active index, or `None` with no items.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.controller.active_index()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.controller.count()
    }

    /// Offset sampled on the last frame.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.drag.current_offset()
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Recognizer configuration for the host's drag binding.
    #[must_use]
    pub fn gesture_options(&self) -> GestureOptions {
        self.drag_config.resolve(self.drag.is_enabled(), self.drag.axis(&self.policy))
    }

    // ── Configuration ───────────────────────────────────────────

    /// Register the index-change callback, replacing any previous one.
    pub fn on_index_change<F>(&mut self, listener: F)
    where
        F: FnMut(usize) + 'static,
    {
        self.controller.set_listener(Box::new(listener));
    }

    /// Update the item count and resettle on the active item.
    pub fn set_count(&mut self, count: usize) {
        if count == self.controller.count() {
            return;
        }
        self.controller.set_count(count);
        self.sync();
    }

    /// Replace the host-owned index. `None` switches to uncontrolled use.
    pub fn set_controlled_index(&mut self, index: Option<usize>) {
        if self.controller.set_controlled(index) {
            self.sync();
        }
    }

    /// Turn drag handling on or off. Disabling mid-gesture releases the
    /// pointer and settles on the active item.
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        let was_dragging = self.drag.is_dragging();
        self.drag.set_enabled(enabled, &mut self.surface);
        if was_dragging && !self.drag.is_dragging() {
            self.sync();
        }
    }

    /// Stop drag handling and restore the surface styles it replaced.
    /// `set_drag_enabled(true)` reattaches.
    pub fn detach(&mut self) {
        self.set_drag_enabled(false);
    }

    // ── Navigation ──────────────────────────────────────────────

    pub fn next(&mut self) -> Navigation {
        let nav = self.controller.next();
        self.settle_on(nav);
        nav
    }

    pub fn prev(&mut self) -> Navigation {
        let nav = self.controller.prev();
        self.settle_on(nav);
        nav
    }

    /// Jump to `index`. The ring and bounded strip clamp out-of-range
    /// input; the infinite strip wraps it.
    pub fn go_to(&mut self, index: i64) -> Navigation {
        let nav = self.controller.go_to(index);
        self.settle_on(nav);
        nav
    }

    /// Activate a trigger with this carousel as its provider.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::OutsideProvider`] if the trigger belongs to
    /// the other carousel kind.
    pub fn activate(&mut self, trigger: Trigger) -> Result<(), ContextError> {
        let kind = self.kind();
        let mut scope = Scope::with_provider(kind, self);
        trigger.activate(&mut scope)
    }

    // ── Frame loop ──────────────────────────────────────────────

    /// Feed one recognizer update through the drag engine.
    pub fn on_gesture(&mut self, update: &GestureUpdate) -> DragOutcome {
        let count = self.controller.count();
        let outcome = self.drag.update(update, &self.policy, count, &mut self.animator, &mut self.surface);
        if let DragOutcome::Commit { index, offset } = outcome {
            self.controller.commit(index);
            let target = self.policy.target_offset(index, offset, count);
            self.animator.start(target, SETTLE_SPRING);
        }
        outcome
    }

    /// Advance the animation and return the root transform for this frame.
    pub fn frame(&mut self, dt_secs: f64) -> Transform {
        self.animator.advance(dt_secs);
        self.drag.sample(self.animator.get());
        self.policy.root_transform(self.drag.current_offset())
    }

    /// Lay out `children`. Items become child nodes of the root in input
    /// order; triggers pass through.
    pub fn render<T>(&mut self, children: Vec<Child<T>>) -> Scene<T> {
        let (items, triggers) = partition(children);
        let count = items.len();
        self.set_count(count);
        let nodes = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| SceneNode::leaf(self.policy.item_transform(index, count), item))
            .collect();
        let root = SceneNode::group(self.policy.root_transform(self.drag.current_offset()), nodes);
        Scene { root, triggers }
    }

    fn settle_on(&mut self, nav: Navigation) {
        if let Navigation::Changed(index) = nav {
            let target = self.policy.target_offset(index, self.drag.current_offset(), self.controller.count());
            self.animator.start(target, SETTLE_SPRING);
        }
    }

    /// Head for the active item after a change that did not come from
    /// navigation. Skipped mid-gesture so the drag keeps the offset.
    fn sync(&mut self) {
        if self.drag.is_dragging() {
            return;
        }
        let Some(index) = self.controller.active_index() else {
            return;
        };
        let target = self.policy.sync_offset(index, self.drag.current_offset(), self.controller.count());
        self.animator.start(target, SETTLE_SPRING);
    }
}

impl<P: NavigationPolicy, A: Animator, S: PointerSurface> Navigate for Carousel<P, A, S> {
    fn active_index(&self) -> Option<usize> {
        Carousel::active_index(self)
    }

    fn count(&self) -> usize {
        Carousel::count(self)
    }

    fn next(&mut self) {
        Carousel::next(self);
    }

    fn prev(&mut self) {
        Carousel::prev(self);
    }

    fn go_to(&mut self, index: i64) {
        Carousel::go_to(self, index);
    }
}
