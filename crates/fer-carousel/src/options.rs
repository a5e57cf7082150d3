//! Carousel geometry and timing.

use std::time::Duration;

use fer_core::ensure;
use fer_core::errors::Result;

/// Default slide duration.
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(500);

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 360.0;

/// Default gap between neighbouring cards in pixels.
pub const DEFAULT_GAP: f64 = 28.0;

/// Validated carousel options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    animation: Duration,
    viewport_width: f64,
    gap: f64,
}

impl CarouselOptions {
    /// Build options, checking that the animation lasts a non-zero time,
    /// the viewport has a positive width, and the gap is not negative.
    pub fn new(animation: Duration, viewport_width: f64, gap: f64) -> Result<Self> {
        ensure!(!animation.is_zero(), "animation duration must be positive");
        ensure!(
            viewport_width.is_finite() && viewport_width > 0.0,
            "viewport width must be positive, got {viewport_width}"
        );
        ensure!(
            gap.is_finite() && gap >= 0.0,
            "card gap must be non-negative, got {gap}"
        );
        Ok(Self {
            animation,
            viewport_width,
            gap,
        })
    }

    /// How long one slide lasts.
    pub fn animation(&self) -> Duration {
        self.animation
    }

    /// Width of the visible area (one card).
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Space between neighbouring cards.
    pub fn gap(&self) -> f64 {
        self.gap
    }

    /// Distance the card strip moves for one month.
    pub fn slide_shift(&self) -> f64 {
        self.viewport_width + self.gap
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            animation: DEFAULT_ANIMATION,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            gap: DEFAULT_GAP,
        }
    }
}
