//! # feiertage-time
//!
//! Date and weekday types plus the movable-feast calendar math
//! (Easter Sunday, Buß- und Bettag) used by the holiday engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Easter Sunday and Penance Day computation.
pub mod easter;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use easter::{easter_sunday, penance_day};
pub use weekday::Weekday;
