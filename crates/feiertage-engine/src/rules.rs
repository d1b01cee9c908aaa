//! The holiday rule table.
//!
//! One entry per German public holiday, compiled in as `const` data and
//! never mutated; safe for unsynchronized concurrent reads.

use crate::region::{states, RegionSet};
use feiertage_core::errors::Result;
use feiertage_time::{easter_sunday, penance_day, Date};

/// When in the year a rule's holiday falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleDate {
    /// The same month and day every year.
    Fixed {
        /// Month (1–12).
        month: u8,
        /// Day of the month.
        day: u8,
    },
    /// A signed day offset from Easter Sunday.
    EasterOffset(i32),
    /// Buß- und Bettag, computed from the weekday of December 25.
    PenanceDay,
}

/// A single holiday rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayRule {
    /// Symbolic holiday name, e.g. `"new_years_day"`.
    pub name: &'static str,
    /// How the holiday's date is determined.
    pub date: RuleDate,
    /// Federal states observing the holiday; empty means nationwide.
    pub regions: &'static [&'static str],
}

impl HolidayRule {
    /// Resolve the rule's date for a given year.
    pub fn resolve(&self, year: u16) -> Result<Date> {
        match self.date {
            RuleDate::Fixed { month, day } => Date::from_ymd(year, month, day),
            RuleDate::EasterOffset(days) => easter_sunday(year)?.add_days(days),
            RuleDate::PenanceDay => penance_day(year),
        }
    }

    /// Return `true` if the rule applies to a subject with the given
    /// regions: nationwide rules always apply, region-gated rules when the
    /// set contains at least one required token.
    pub fn applies_to(&self, regions: &RegionSet) -> bool {
        self.regions.is_empty() || self.regions.iter().any(|r| regions.contains(r))
    }
}

/// All German public holidays, in calendar order.
///
/// The table is non-overlapping for any fixed year: at most one rule
/// matches a given date.
pub const RULES: &[HolidayRule] = &[
    // Neujahr (Jan 1, nationwide)
    HolidayRule {
        name: "new_years_day",
        date: RuleDate::Fixed { month: 1, day: 1 },
        regions: &[],
    },
    // Heilige Drei Könige (Jan 6)
    HolidayRule {
        name: "twelfth_day",
        date: RuleDate::Fixed { month: 1, day: 6 },
        regions: &[
            states::BADEN_WUERTTEMBERG,
            states::BAYERN,
            states::SACHSEN_ANHALT,
        ],
    },
    // Karfreitag (nationwide)
    HolidayRule {
        name: "good_friday",
        date: RuleDate::EasterOffset(-2),
        regions: &[],
    },
    // Ostersonntag is deliberately not listed: it always falls on a Sunday
    // and is not a separate statutory holiday.
    // Ostermontag (nationwide)
    HolidayRule {
        name: "easter_monday",
        date: RuleDate::EasterOffset(1),
        regions: &[],
    },
    // Maifeiertag (May 1, nationwide)
    HolidayRule {
        name: "may_first",
        date: RuleDate::Fixed { month: 5, day: 1 },
        regions: &[],
    },
    // Christi Himmelfahrt (nationwide)
    HolidayRule {
        name: "ascension_day",
        date: RuleDate::EasterOffset(39),
        regions: &[],
    },
    // Pfingstmontag (nationwide)
    HolidayRule {
        name: "whit_monday",
        date: RuleDate::EasterOffset(50),
        regions: &[],
    },
    // Fronleichnam
    HolidayRule {
        name: "corpus_christi",
        date: RuleDate::EasterOffset(60),
        regions: &[
            states::BADEN_WUERTTEMBERG,
            states::BAYERN,
            states::HESSEN,
            states::NORDRHEIN_WESTFALEN,
            states::RHEINLAND_PFALZ,
            states::SAARLAND,
        ],
    },
    // Mariä Himmelfahrt (Aug 15)
    HolidayRule {
        name: "assumption_day",
        date: RuleDate::Fixed { month: 8, day: 15 },
        regions: &[states::SAARLAND],
    },
    // Tag der deutschen Einheit (Oct 3, nationwide)
    HolidayRule {
        name: "german_unification_day",
        date: RuleDate::Fixed { month: 10, day: 3 },
        regions: &[],
    },
    // Reformationstag (Oct 31)
    HolidayRule {
        name: "reformation_day",
        date: RuleDate::Fixed { month: 10, day: 31 },
        regions: &[
            states::BRANDENBURG,
            states::MECKLENBURG_VORPOMMERN,
            states::SACHSEN,
            states::SACHSEN_ANHALT,
            states::THUERINGEN,
        ],
    },
    // Allerheiligen (Nov 1)
    HolidayRule {
        name: "all_saints_day",
        date: RuleDate::Fixed { month: 11, day: 1 },
        regions: &[
            states::BADEN_WUERTTEMBERG,
            states::BAYERN,
            states::NORDRHEIN_WESTFALEN,
            states::RHEINLAND_PFALZ,
            states::SAARLAND,
        ],
    },
    // Buß- und Bettag
    HolidayRule {
        name: "penance_day",
        date: RuleDate::PenanceDay,
        regions: &[states::SACHSEN],
    },
    // 1. Weihnachtsfeiertag (Dec 25, nationwide)
    HolidayRule {
        name: "christmas_day",
        date: RuleDate::Fixed { month: 12, day: 25 },
        regions: &[],
    },
    // 2. Weihnachtsfeiertag (Dec 26, nationwide)
    HolidayRule {
        name: "boxing_day",
        date: RuleDate::Fixed { month: 12, day: 26 },
        regions: &[],
    },
];
