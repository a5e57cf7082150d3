//! Navigation state machine.
//!
//! ```text
//! Idle --Navigate(dir)--> Animating --deadline reached--> Idle
//! ```
//!
//! Navigation requests that arrive while `Animating` are rejected.

use std::time::Instant;

use fer_time::YearMonth;

/// Direction of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the previous month.
    Prev,
    /// Towards the next month.
    Next,
}

impl Direction {
    /// Signed month step.
    pub fn months(self) -> i32 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Navigation state of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Ready for input.
    Idle,
    /// A slide is running.
    Animating {
        /// Slide direction.
        direction: Direction,
        /// Month displayed once the slide ends.
        target: YearMonth,
        /// When the slide ends.
        deadline: Instant,
    },
}

impl NavState {
    /// Return `true` while a slide is running.
    pub fn is_animating(&self) -> bool {
        matches!(self, NavState::Animating { .. })
    }
}
