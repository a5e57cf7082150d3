//! # fer-core
//!
//! Core types, error definitions, and settings for feriados-rs.
//!
//! This crate provides the building blocks shared across the other crates in
//! the workspace: primitive aliases, the error hierarchy with its `ensure!` /
//! `fail!` macros, text parsers, and the process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Gregorian calendar year.  Any `i32` value is accepted.
pub type Year = i32;

/// Offset expressed in whole days.
pub type DayOffset = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
