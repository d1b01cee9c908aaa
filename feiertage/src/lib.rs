//! # feiertage
//!
//! German public-holiday determination: nationwide fixed-date holidays,
//! movable feasts computed from Easter Sunday, and region-gated holidays
//! observed only in certain federal states.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `feiertage-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! feiertage = "0.1"
//! ```
//!
//! ```rust
//! use feiertage::engine::{states, HolidayDate};
//! use feiertage::time::Date;
//!
//! let mut day = HolidayDate::new(Date::from_ymd(2013, 1, 6)?);
//! day.add_region(states::BAYERN);
//! assert!(day.is_holiday()?);
//! assert_eq!(day.holiday_name()?, Some("twelfth_day"));
//! # Ok::<(), feiertage::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared macros.
pub use feiertage_core as core;

/// Date, weekday, and movable-feast calendar math.
pub use feiertage_time as time;

/// Region matching, holiday rules, engine, and delegation.
pub use feiertage_engine as engine;
