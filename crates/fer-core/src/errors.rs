//! Error types for feriados-rs.
//!
//! A single `thiserror`-derived enum covers every fallible operation in the
//! workspace.  Preconditions are checked with the [`ensure!`](crate::ensure)
//! macro and hard failures raised with [`fail!`](crate::fail).

use thiserror::Error;

/// The top-level error type used throughout feriados-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (invalid day, month, or out-of-range arithmetic).
    #[error("date error: {0}")]
    Date(String),

    /// Text that could not be parsed into the requested type.
    #[error("cannot parse {input:?} as {expected}")]
    Parse {
        /// The offending input.
        input: String,
        /// Description of the expected format (e.g. `"YYYY-MM-DD"`).
        expected: &'static str,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout feriados-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fer_core::{ensure, errors::Error};
/// fn positive(ms: u64) -> fer_core::errors::Result<u64> {
///     ensure!(ms > 0, "duration must be positive, got {ms}");
///     Ok(ms)
/// }
/// assert!(positive(500).is_ok());
/// assert!(positive(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use fer_core::{fail, errors::Error};
/// fn always_err() -> fer_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(width: f64) -> Result<f64> {
        crate::ensure!(width > 0.0, "width must be positive, got {width}");
        Ok(width)
    }

    #[test]
    fn ensure_reports_precondition() {
        assert_eq!(checked(2.0), Ok(2.0));
        assert_eq!(
            checked(-1.0),
            Err(Error::Precondition("width must be positive, got -1".into()))
        );
    }

    #[test]
    fn parse_error_message() {
        let e = Error::Parse {
            input: "2025-13".into(),
            expected: "YYYY-MM",
        };
        assert_eq!(e.to_string(), "cannot parse \"2025-13\" as YYYY-MM");
    }
}
