//! Active index ownership and imperative navigation.
//!
//! The active index is either controlled (the host owns it and the
//! controller only reports change requests) or uncontrolled (the controller
//! owns it, starting from a default). Either way navigation runs against a
//! working index that the controller updates immediately, so several
//! navigations between two host updates compound the way a user expects.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::fmt;

use crate::policy::resolve_index;

/// How indices behave at the ends of the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Steps wrap around; direct jumps clamp. Used by the ring.
    Ring,
    /// Steps and jumps clamp at both ends.
    Bounded,
    /// Steps and jumps wrap around.
    Infinite,
}

impl WrapMode {
    /// Whether `next` / `prev` and gesture releases wrap across the ends.
    #[must_use]
    pub fn wraps_steps(self) -> bool {
        matches!(self, Self::Ring | Self::Infinite)
    }

    /// Whether `go_to` wraps out-of-range input instead of clamping it.
    #[must_use]
    pub fn wraps_jumps(self) -> bool {
        matches!(self, Self::Infinite)
    }
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The active index moved to the contained value.
    Changed(usize),
    /// Nothing happened: no items, already there, or clamped at an end.
    Unchanged,
}

impl Navigation {
    #[must_use]
    pub fn changed(self) -> Option<usize> {
        match self {
            Self::Changed(index) => Some(index),
            Self::Unchanged => None,
        }
    }
}

/// Callback invoked with the new index after every change.
pub type IndexListener = Box<dyn FnMut(usize)>;

/// Owns the notion of "active index" for one carousel.
pub struct IndexController {
    wrap: WrapMode,
    count: usize,
    controlled: Option<usize>,
    current: usize,
    listener: Option<IndexListener>,
}

impl fmt::Debug for IndexController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexController")
            .field("wrap", &self.wrap)
            .field("count", &self.count)
            .field("controlled", &self.controlled)
            .field("current", &self.current)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl IndexController {
    #[must_use]
    pub fn new(wrap: WrapMode, default_index: usize, controlled: Option<usize>) -> Self {
        Self { wrap, count: 0, controlled, current: controlled.unwrap_or(default_index), listener: None }
    }

    #[must_use]
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap
    }

    pub fn set_wrap_mode(&mut self, wrap: WrapMode) {
        self.wrap = wrap;
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Replace the host-owned index. `None` hands ownership back to the controller.
    ///
    /// Returns `true` when the reported active index changed.
    pub fn set_controlled(&mut self, controlled: Option<usize>) -> bool {
        let before = self.active_index();
        self.controlled = controlled;
        if let Some(index) = controlled {
            self.current = index;
        }
        self.active_index() != before
    }

    /// The active index, clamped into range. `None` when there are no items.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        Some(self.controlled.unwrap_or(self.current).min(self.count - 1))
    }

    pub fn set_listener(&mut self, listener: IndexListener) {
        self.listener = Some(listener);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Step forward one item.
    pub fn next(&mut self) -> Navigation {
        let Some(base) = self.working_index() else {
            return Navigation::Unchanged;
        };
        let target = if self.wrap.wraps_steps() { (base + 1) % self.count } else { (base + 1).min(self.count - 1) };
        self.change_to(base, target)
    }

    /// Step back one item.
    pub fn prev(&mut self) -> Navigation {
        let Some(base) = self.working_index() else {
            return Navigation::Unchanged;
        };
        let target = if self.wrap.wraps_steps() { (base + self.count - 1) % self.count } else { base.saturating_sub(1) };
        self.change_to(base, target)
    }

    /// Jump to `index`, clamping or wrapping out-of-range input.
    pub fn go_to(&mut self, index: i64) -> Navigation {
        let Some(base) = self.working_index() else {
            return Navigation::Unchanged;
        };
        let Some(target) = resolve_index(index, self.count, self.wrap.wraps_jumps()) else {
            return Navigation::Unchanged;
        };
        self.change_to(base, target)
    }

    /// Commit an index already resolved by a gesture.
    pub fn commit(&mut self, index: usize) -> Navigation {
        let Some(base) = self.working_index() else {
            return Navigation::Unchanged;
        };
        self.change_to(base, index.min(self.count - 1))
    }

    fn working_index(&self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        Some(self.current.min(self.count - 1))
    }

    fn change_to(&mut self, base: usize, target: usize) -> Navigation {
        if target == base {
            return Navigation::Unchanged;
        }
        self.current = target;
        tracing::debug!(index = target, count = self.count, controlled = self.is_controlled(), "carousel: index changed");
        if let Some(listener) = self.listener.as_mut() {
            listener(target);
        }
        Navigation::Changed(target)
    }
}
