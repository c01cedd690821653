//! Viewport size classification.

use std::cell::Cell;

use crate::error::MapServiceError;

/// Viewport width in CSS pixels at or below which the viewport is considered narrow.
pub const DEFAULT_BREAKPOINT: u32 = 658;

/// Access to the media query facility of the host environment.
pub trait Viewport {
    /// Evaluates the `(max-width: <max_width>px)` media query.
    fn matches_max_width(&self, max_width: u32) -> Result<bool, MapServiceError>;
}

/// Display class of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Viewport width is less than or equal to the breakpoint.
    Narrow,
    /// Viewport width is greater than the breakpoint.
    Wide,
}

impl ViewportClass {
    /// Classifies the viewport by evaluating the media query once.
    ///
    /// The result is not updated when the viewport is resized later.
    pub fn detect(viewport: &impl Viewport, breakpoint: u32) -> Result<Self, MapServiceError> {
        let class = if viewport.matches_max_width(breakpoint)? {
            Self::Narrow
        } else {
            Self::Wide
        };

        Ok(class)
    }

    /// Classifies a known width.
    pub fn from_width(width: u32, breakpoint: u32) -> Self {
        if width <= breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Viewport with a width set by the caller.
///
/// Used on targets without a browser window and as a test double.
#[derive(Debug, Default)]
pub struct FixedViewport {
    width: Cell<u32>,
}

impl FixedViewport {
    /// Creates a viewport of the given width.
    pub fn new(width: u32) -> Self {
        Self {
            width: Cell::new(width),
        }
    }

    /// Current width.
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    /// Changes the width, as if the window was resized.
    pub fn set_width(&self, width: u32) {
        self.width.set(width);
    }
}

impl Viewport for FixedViewport {
    fn matches_max_width(&self, max_width: u32) -> Result<bool, MapServiceError> {
        Ok(self.width() <= max_width)
    }
}
