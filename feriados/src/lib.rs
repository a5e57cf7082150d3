//! # feriados
//!
//! Portuguese public holidays (fixed dates and the feasts that move with
//! Easter) and a month carousel that highlights them.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates, and ships the `feriados` command-line tool.
//!
//! ```rust
//! use feriados::time::{easter_sunday, list_holidays};
//!
//! assert_eq!(easter_sunday(2024).to_string(), "2024-03-31");
//! assert_eq!(list_holidays(2024).len(), 13);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and settings.
pub use fer_core as core;

/// Dates, Easter, holidays, and the Portugal calendar.
pub use fer_time as time;

/// The month carousel model and its text rendering.
pub use fer_carousel as carousel;
