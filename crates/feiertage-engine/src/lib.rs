//! # feiertage-engine
//!
//! Determines whether a calendar date is a German public holiday.
//!
//! The engine evaluates a [`Date`](feiertage_time::Date) against a fixed
//! table of holiday rules — nationwide fixed dates, Easter-relative movable
//! feasts, and region-gated holidays that apply only in certain federal
//! states — and reports the holiday status together with a symbolic name.
//! A caller can override the computed result per subject.
//!
//! ```
//! use feiertage_engine::{HolidayDate, states};
//! use feiertage_time::Date;
//!
//! let mut day = HolidayDate::new(Date::from_ymd(2018, 11, 21)?);
//! day.add_region(states::SACHSEN);
//! assert!(day.is_holiday()?);
//! assert_eq!(day.holiday_name()?, Some("penance_day"));
//! # Ok::<(), feiertage_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Delegation of holiday queries to a date-valued attribute.
pub mod adapter;

/// Holiday engine and per-subject override state.
pub mod engine;

/// Region tokens and the `RegionSet`.
pub mod region;

/// The holiday rule table.
pub mod rules;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use adapter::DateSource;
pub use engine::{holiday_on, HolidayDate, Override};
pub use region::{normalize, states, RegionSet};
pub use rules::{HolidayRule, RuleDate, RULES};
