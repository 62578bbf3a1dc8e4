//! Error types for tollcalc.
//!
//! Every failure in the workspace is a validation failure: the fee engine is
//! pure, so nothing here is retryable. The `ensure!` and `fail!` macros give
//! call sites a one-line way to reject bad input.

use chrono::NaiveDate;
use thiserror::Error;

/// The top-level error type used throughout tollcalc.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// An argument was missing or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The single-day entry point received passes from more than one date.
    #[error("Input dates does not represent the same day pass ({first} and {other})")]
    NotSameDay {
        /// Date of the first pass in the batch.
        first: NaiveDate,
        /// The first date found that differs from `first`.
        other: NaiveDate,
    },

    /// Precondition violated (raised by [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

impl Error {
    /// Return `true` for errors caused by caller-supplied input.
    ///
    /// Holds for every variant today; callers should still match on it
    /// rather than assume.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument(_) | Error::NotSameDay { .. } | Error::Precondition(_)
        )
    }
}

/// Shorthand `Result` type used throughout tollcalc.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use toll_core::{ensure, errors::Error};
/// fn positive(x: f64) -> toll_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
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

/// Return `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use toll_core::{fail, errors::Error};
/// fn always_err() -> toll_core::errors::Result<()> {
///     fail!("time of day is required");
/// }
/// assert!(matches!(always_err(), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
