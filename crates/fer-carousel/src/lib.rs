//! # fer-carousel
//!
//! A month carousel highlighting public holidays and today's date.
//!
//! The carousel is a plain state object driven by explicit events
//! ([`CarouselEvent`]) and timestamps, answering with the [`Effect`] a view
//! layer should perform.  Nothing here depends on a UI toolkit; the
//! [`render`] module draws cards as monospaced text.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use fer_carousel::{Carousel, CarouselEvent, CarouselOptions, Direction, Effect};
//! use fer_time::{Date, Month, YearMonth};
//!
//! let today = Date::from_ymd(2025, 12, 25).unwrap();
//! let mut carousel = Carousel::new(YearMonth::of(today), today, CarouselOptions::default());
//!
//! let t0 = Instant::now();
//! carousel.dispatch(CarouselEvent::Navigate(Direction::Next), t0).unwrap();
//! let done = carousel
//!     .dispatch(CarouselEvent::Tick, t0 + Duration::from_millis(500))
//!     .unwrap();
//! assert_eq!(done, Effect::Rerender);
//! assert_eq!(carousel.cursor(), YearMonth::new(2026, Month::January));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Month cards.
pub mod card;

/// The carousel state object.
pub mod carousel;

/// Events and effects.
pub mod event;

/// Geometry and timing options.
pub mod options;

/// Text rendering.
pub mod render;

/// Navigation state machine.
pub mod state;

/// Tooltip placement.
pub mod tooltip;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use card::{Cell, DayCell, MonthCard};
pub use carousel::Carousel;
pub use event::{CarouselEvent, Effect};
pub use options::CarouselOptions;
pub use render::RenderStyle;
pub use state::{Direction, NavState};
pub use tooltip::{CellGeometry, Placement, Span, Tooltip};
