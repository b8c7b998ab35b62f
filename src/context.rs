//! Scoped navigation handle for trigger regions nested in a carousel.
//!
//! A carousel provides itself to a [`Scope`] while its children are handled.
//! Nested elements such as the next and previous [`Trigger`]s look up the
//! innermost provider of their carousel kind and navigate through the
//! returned [`CarouselHandle`] instead of having the carousel threaded to
//! them. Looking up a kind with no provider in scope is a programming error
//! and is reported as [`ContextError::OutsideProvider`].

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which carousel widget a scope entry or trigger belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarouselKind {
    Circular,
    Linear,
}

impl CarouselKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Circular => "CircularCarousel",
            Self::Linear => "LinearCarousel",
        }
    }
}

impl fmt::Display for CarouselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a compound component is used outside its carousel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("{component} compound components must be used within {component}")]
    OutsideProvider { component: CarouselKind },
}

/// Navigation capability a carousel exposes to its scope.
pub trait Navigate {
    fn active_index(&self) -> Option<usize>;
    fn count(&self) -> usize;
    fn next(&mut self);
    fn prev(&mut self);
    fn go_to(&mut self, index: i64);
}

struct Provider<'a> {
    kind: CarouselKind,
    nav: &'a mut dyn Navigate,
}

/// Stack of carousels currently providing navigation to their children.
#[derive(Default)]
pub struct Scope<'a> {
    providers: Vec<Provider<'a>>,
}

impl fmt::Debug for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.providers.iter().map(|p| p.kind)).finish()
    }
}

impl<'a> Scope<'a> {
    /// An empty scope with no carousel in it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A scope with a single carousel provider.
    #[must_use]
    pub fn with_provider(kind: CarouselKind, nav: &'a mut dyn Navigate) -> Self {
        let mut scope = Self::new();
        scope.provide(kind, nav);
        scope
    }

    /// Enter a carousel. Later lookups of `kind` resolve to `nav`.
    pub fn provide(&mut self, kind: CarouselKind, nav: &'a mut dyn Navigate) {
        self.providers.push(Provider { kind, nav });
    }

    /// Leave the innermost carousel.
    pub fn leave(&mut self) -> Option<CarouselKind> {
        self.providers.pop().map(|p| p.kind)
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.providers.len()
    }

    /// Handle to the innermost carousel of `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::OutsideProvider`] if no such carousel is in scope.
    pub fn use_carousel(&mut self, kind: CarouselKind) -> Result<CarouselHandle<'_>, ContextError> {
        self.providers
            .iter_mut()
            .rev()
            .find(|p| p.kind == kind)
            .map(|p| CarouselHandle { kind, nav: &mut *p.nav })
            .ok_or(ContextError::OutsideProvider { component: kind })
    }
}

/// Read-and-navigate view of one carousel, obtained from a [`Scope`].
pub struct CarouselHandle<'s> {
    kind: CarouselKind,
    nav: &'s mut dyn Navigate,
}

impl fmt::Debug for CarouselHandle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselHandle")
            .field("kind", &self.kind)
            .field("active_index", &self.nav.active_index())
            .field("count", &self.nav.count())
            .finish()
    }
}

impl CarouselHandle<'_> {
    #[must_use]
    pub fn kind(&self) -> CarouselKind {
        self.kind
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.nav.active_index()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.nav.count()
    }

    pub fn next(&mut self) {
        self.nav.next();
    }

    pub fn prev(&mut self) {
        self.nav.prev();
    }

    pub fn go_to(&mut self, index: i64) {
        self.nav.go_to(index);
    }
}

/// What activating a trigger does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerRole {
    Next,
    Prev,
}

/// A clickable region that steps its carousel when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub kind: CarouselKind,
    pub role: TriggerRole,
}

impl Trigger {
    #[must_use]
    pub fn next(kind: CarouselKind) -> Self {
        Self { kind, role: TriggerRole::Next }
    }

    #[must_use]
    pub fn prev(kind: CarouselKind) -> Self {
        Self { kind, role: TriggerRole::Prev }
    }

    /// Navigate the owning carousel found in `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::OutsideProvider`] if the owning carousel is not in scope.
    pub fn activate(&self, scope: &mut Scope<'_>) -> Result<(), ContextError> {
        let mut handle = scope.use_carousel(self.kind)?;
        match self.role {
            TriggerRole::Next => handle.next(),
            TriggerRole::Prev => handle.prev(),
        }
        Ok(())
    }
}
