//! Pointer capture and cursor feedback on the element receiving drags.
//!
//! The drag engine acquires pointer capture when a gesture starts and
//! releases it when the gesture ends. Release is best effort: the platform
//! may already have dropped the capture (pointer cancelled, element
//! detached), so a failed release is logged and otherwise ignored.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// Pointer capture failure reported by a [`PointerSurface`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// The surface refused to capture the pointer.
    #[error("failed to capture pointer {pointer_id}: {reason}")]
    CaptureFailed { pointer_id: i32, reason: String },
    /// The pointer is not captured by this surface.
    #[error("pointer {0} is not captured")]
    NotCaptured(i32),
}

/// Inline styles the carousel manages on the drag surface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SurfaceStyle {
    pub cursor: Option<String>,
    pub touch_action: Option<String>,
}

/// The element drag gestures are delivered to.
pub trait PointerSurface {
    /// Route all further events for `pointer_id` to this surface.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::CaptureFailed`] if the platform refuses.
    fn set_pointer_capture(&mut self, pointer_id: i32) -> Result<(), SurfaceError>;

    /// Stop routing events for `pointer_id` to this surface.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::NotCaptured`] if the capture was already gone.
    fn release_pointer_capture(&mut self, pointer_id: i32) -> Result<(), SurfaceError>;

    fn style(&self) -> SurfaceStyle;

    fn set_style(&mut self, style: SurfaceStyle);

    fn set_cursor(&mut self, cursor: &str) {
        let mut style = self.style();
        style.cursor = Some(cursor.to_owned());
        self.set_style(style);
    }
}

/// Surface for headless use. Tracks styles and captures in memory.
#[derive(Debug, Clone, Default)]
pub struct NullSurface {
    style: SurfaceStyle,
    captured: Option<i32>,
}

impl NullSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The pointer currently captured, if any.
    #[must_use]
    pub fn captured(&self) -> Option<i32> {
        self.captured
    }
}

impl PointerSurface for NullSurface {
    fn set_pointer_capture(&mut self, pointer_id: i32) -> Result<(), SurfaceError> {
        self.captured = Some(pointer_id);
        Ok(())
    }

    fn release_pointer_capture(&mut self, pointer_id: i32) -> Result<(), SurfaceError> {
        if self.captured != Some(pointer_id) {
            return Err(SurfaceError::NotCaptured(pointer_id));
        }
        self.captured = None;
        Ok(())
    }

    fn style(&self) -> SurfaceStyle {
        self.style.clone()
    }

    fn set_style(&mut self, style: SurfaceStyle) {
        self.style = style;
    }
}

/// Release `pointer_id`, logging instead of propagating a failure.
pub(crate) fn release_quietly(surface: &mut dyn PointerSurface, pointer_id: i32) {
    if let Err(err) = surface.release_pointer_capture(pointer_id) {
        tracing::debug!(pointer_id, error = %err, "drag: pointer capture already released");
    }
}
