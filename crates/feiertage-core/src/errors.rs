//! Error types for feiertage-rs.
//!
//! All fallible operations in the workspace return [`Result`]; the
//! `ensure!` and `fail!` macros cover the common precondition and
//! hard-failure cases.

use thiserror::Error;

/// The top-level error type used throughout feiertage-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (produced by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (produced by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date-related error (invalid construction, out-of-range components).
    #[error("date error: {0}")]
    Date(String),

    /// Day arithmetic would leave the supported date range.
    #[error("day offset out of range: {0}")]
    DayOffset(String),

    /// A holiday query was delegated but no date source is configured.
    #[error("no date source: implement a date accessor to delegate holiday checks")]
    MissingDateSource,

    /// An override value outside the permitted tri-state set.
    #[error("invalid override value {0:?}: expected \"true\", \"false\", or \"unset\"")]
    InvalidOverride(String),
}

/// Shorthand `Result` type used throughout feiertage-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use feiertage_core::ensure;
/// fn checked_year(year: u16) -> feiertage_core::Result<u16> {
///     ensure!(year >= 1583, "year {year} predates the Gregorian calendar");
///     Ok(year)
/// }
/// assert!(checked_year(2024).is_ok());
/// assert!(checked_year(1500).is_err());
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
/// use feiertage_core::fail;
/// fn unsupported() -> feiertage_core::Result<()> {
///     fail!("not supported");
/// }
/// assert!(unsupported().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
