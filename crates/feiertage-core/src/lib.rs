//! # feiertage-core
//!
//! Error types, `Result` alias, and shared macros for feiertage-rs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error and `Result` definitions.
pub mod errors;

pub use errors::{Error, Result};
