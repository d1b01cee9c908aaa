//! Holiday engine.
//!
//! [`holiday_on`] is the pure rule scan; [`HolidayDate`] composes a date
//! with its region set and per-subject override state.

use std::str::FromStr;

use crate::region::RegionSet;
use crate::rules::RULES;
use feiertage_core::errors::{Error, Result};
use feiertage_time::Date;

/// Tri-state manual override.
///
/// When set, it replaces rule evaluation entirely.  Parsing from a string
/// accepts `"true"`, `"false"`, and `"unset"` (case-insensitive) and rejects
/// anything else, so no partial state is ever stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Override {
    /// No override; the rule table decides.
    #[default]
    Unset,
    /// Force the subject to be a holiday.
    Holiday,
    /// Force the subject to not be a holiday.
    NotHoliday,
}

impl Override {
    /// The forced value, or `None` when unset.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Override::Unset => None,
            Override::Holiday => Some(true),
            Override::NotHoliday => Some(false),
        }
    }
}

impl FromStr for Override {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "true" => Ok(Override::Holiday),
            "false" => Ok(Override::NotHoliday),
            "unset" => Ok(Override::Unset),
            _ => Err(Error::InvalidOverride(s.to_string())),
        }
    }
}

/// Scan the rule table for a holiday on `date` as observed by `regions`.
///
/// Rules are checked in table order.  A rule matches when it resolves to
/// the date's month and day in the date's year; a matched rule is satisfied
/// when it is nationwide or at least one of its required regions is in
/// `regions`.  A matched-but-gated-out rule does not stop the scan.
pub fn holiday_on(date: Date, regions: &RegionSet) -> Result<Option<&'static str>> {
    let year = date.year();
    let (month, day) = (date.month(), date.day_of_month());
    for rule in RULES {
        let resolved = rule.resolve(year)?;
        if resolved.month() == month && resolved.day_of_month() == day && rule.applies_to(regions)
        {
            return Ok(Some(rule.name));
        }
    }
    Ok(None)
}

/// A date together with its declared regions and override state.
///
/// This is the engine's subject: construction leaves the region set empty
/// and both overrides unset, so holiday queries start out purely
/// rule-driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayDate {
    date: Date,
    regions: RegionSet,
    overridden: Override,
    name_override: Option<String>,
}

impl HolidayDate {
    /// Create a subject for `date` with no regions and no override.
    pub fn new(date: Date) -> Self {
        Self {
            date,
            regions: RegionSet::new(),
            overridden: Override::Unset,
            name_override: None,
        }
    }

    /// The underlying date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The declared regions.
    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    /// Replace the declared regions wholesale.
    pub fn set_regions<I, S>(&mut self, regions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.regions.set(regions);
    }

    /// Declare one additional region.
    pub fn add_region(&mut self, region: &str) {
        self.regions.add(region);
    }

    /// The current tri-state override.
    pub fn override_state(&self) -> Override {
        self.overridden
    }

    /// Set the tri-state override.
    pub fn set_override(&mut self, value: Override) {
        self.overridden = value;
    }

    /// Reset the tri-state override to unset.
    pub fn clear_override(&mut self) {
        self.overridden = Override::Unset;
    }

    /// Set the name-string override (compatibility form).
    ///
    /// A non-empty name forces the subject to be a holiday with that name;
    /// the empty string forces it to not be a holiday.  The tri-state
    /// override, when set, still takes precedence.
    pub fn set_holiday_name(&mut self, name: impl Into<String>) {
        self.name_override = Some(name.into());
    }

    /// Remove the name-string override, restoring rule evaluation.
    pub fn clear_holiday_name(&mut self) {
        self.name_override = None;
    }

    /// Return `true` if this date is a holiday for the declared regions.
    ///
    /// Evaluation order: tri-state override, then name-string override,
    /// then the rule table.
    pub fn is_holiday(&self) -> Result<bool> {
        if let Some(forced) = self.overridden.as_bool() {
            return Ok(forced);
        }
        if let Some(name) = &self.name_override {
            return Ok(!name.is_empty());
        }
        Ok(holiday_on(self.date, &self.regions)?.is_some())
    }

    /// Return the holiday's symbolic name, or `None` when not a holiday.
    ///
    /// The tri-state override carries no name, so both forced states
    /// report `None`.
    pub fn holiday_name(&self) -> Result<Option<&str>> {
        match self.overridden {
            Override::Holiday | Override::NotHoliday => return Ok(None),
            Override::Unset => {}
        }
        if let Some(name) = &self.name_override {
            return Ok(if name.is_empty() { None } else { Some(name) });
        }
        holiday_on(self.date, &self.regions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::states;

    fn subject(y: u16, m: u8, d: u8) -> HolidayDate {
        HolidayDate::new(Date::from_ymd(y, m, d).unwrap())
    }

    #[test]
    fn new_years_day_is_nationwide() {
        let day = subject(2012, 1, 1);
        assert!(day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), Some("new_years_day"));
    }

    #[test]
    fn ordinary_day_is_no_holiday() {
        let day = subject(2012, 1, 2);
        assert!(!day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), None);
    }

    #[test]
    fn twelfth_day_requires_a_region() {
        let mut day = subject(2013, 1, 6);
        assert!(!day.is_holiday().unwrap());

        day.add_region("Baden_Wuerttemberg");
        assert!(day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), Some("twelfth_day"));
    }

    #[test]
    fn good_friday_2012() {
        // Easter 2012 = April 8
        let day = subject(2012, 4, 6);
        assert!(day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), Some("good_friday"));
    }

    #[test]
    fn easter_sunday_is_no_listed_holiday() {
        let day = subject(2012, 4, 8);
        assert!(!day.is_holiday().unwrap());
    }

    #[test]
    fn ascension_day_2014() {
        // Easter 2014 = April 20, +39 days
        let day = subject(2014, 5, 29);
        assert!(day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), Some("ascension_day"));
    }

    #[test]
    fn penance_day_only_in_sachsen() {
        let mut day = subject(2018, 11, 21);
        day.add_region(states::SACHSEN);
        assert!(day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), Some("penance_day"));

        let mut day = subject(2018, 11, 21);
        day.add_region(states::BAYERN);
        assert!(!day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), None);
    }

    #[test]
    fn region_gating_uses_or_semantics() {
        // Corpus Christi 2017 = June 15; one matching region out of many
        // declared is enough.
        let mut day = subject(2017, 6, 15);
        day.set_regions(["berlin", "nordrhein_westfalen"]);
        assert!(day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), Some("corpus_christi"));
    }

    #[test]
    fn override_takes_precedence_over_rules() {
        let mut day = subject(2012, 1, 1);
        day.set_override(Override::NotHoliday);
        assert!(!day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), None);

        let mut day = subject(2012, 1, 2);
        day.set_override(Override::Holiday);
        assert!(day.is_holiday().unwrap());
        // the override path carries no name
        assert_eq!(day.holiday_name().unwrap(), None);

        day.clear_override();
        assert!(!day.is_holiday().unwrap());
    }

    #[test]
    fn name_override_forces_result() {
        let mut day = subject(2012, 1, 2);
        day.set_holiday_name("company_anniversary");
        assert!(day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), Some("company_anniversary"));

        // the empty string forces a non-holiday
        let mut day = subject(2012, 1, 1);
        day.set_holiday_name("");
        assert!(!day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), None);

        day.clear_holiday_name();
        assert!(day.is_holiday().unwrap());
    }

    #[test]
    fn tri_state_override_beats_name_override() {
        let mut day = subject(2012, 1, 2);
        day.set_holiday_name("company_anniversary");
        day.set_override(Override::NotHoliday);
        assert!(!day.is_holiday().unwrap());
        assert_eq!(day.holiday_name().unwrap(), None);
    }

    #[test]
    fn queries_are_idempotent() {
        let mut day = subject(2016, 11, 1);
        day.add_region("BAYERN");
        let first = (day.is_holiday().unwrap(), day.holiday_name().unwrap());
        let second = (day.is_holiday().unwrap(), day.holiday_name().unwrap());
        assert_eq!(first, second);
        assert_eq!(first, (true, Some("all_saints_day")));
    }

    #[test]
    fn override_parsing() {
        assert_eq!("true".parse::<Override>().unwrap(), Override::Holiday);
        assert_eq!("False".parse::<Override>().unwrap(), Override::NotHoliday);
        assert_eq!(" UNSET ".parse::<Override>().unwrap(), Override::Unset);
        assert_eq!(
            "maybe".parse::<Override>(),
            Err(Error::InvalidOverride("maybe".into()))
        );
    }

    #[test]
    fn holiday_on_reports_first_satisfied_rule() {
        let regions = RegionSet::new();
        let date = Date::from_ymd(2015, 10, 3).unwrap();
        assert_eq!(
            holiday_on(date, &regions).unwrap(),
            Some("german_unification_day")
        );
    }
}
