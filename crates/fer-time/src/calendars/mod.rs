//! Concrete calendar implementations.

/// Portuguese public holidays.
pub mod portugal;
