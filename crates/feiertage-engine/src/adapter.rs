//! Delegation of holiday queries to a date-valued attribute.
//!
//! A type that is not itself a date can still answer holiday queries by
//! exposing the [`HolidayDate`] it carries.  The accessor is an explicit
//! trait method, so each implementing type decides which field (or
//! computation) backs it; an unconfigured source is a typed error, never a
//! silent `false`.

use crate::engine::HolidayDate;
use feiertage_core::errors::{Error, Result};

/// The has-a-date capability used for holiday delegation.
pub trait DateSource {
    /// The date the holiday check is delegated to, if configured.
    fn holiday_date(&self) -> Option<&HolidayDate>;
}

/// Return whether the subject's date is a holiday.
///
/// Fails with [`Error::MissingDateSource`] when no date is configured.
pub fn is_holiday<S: DateSource + ?Sized>(subject: &S) -> Result<bool> {
    subject
        .holiday_date()
        .ok_or(Error::MissingDateSource)?
        .is_holiday()
}

/// Return the holiday name of the subject's date, or `None` when it is not
/// a holiday.
///
/// Fails with [`Error::MissingDateSource`] when no date is configured.
pub fn holiday_name<S: DateSource + ?Sized>(subject: &S) -> Result<Option<&str>> {
    subject
        .holiday_date()
        .ok_or(Error::MissingDateSource)?
        .holiday_name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use feiertage_time::Date;

    struct Appointment {
        scheduled: HolidayDate,
    }

    impl DateSource for Appointment {
        fn holiday_date(&self) -> Option<&HolidayDate> {
            Some(&self.scheduled)
        }
    }

    struct Draft;

    impl DateSource for Draft {
        fn holiday_date(&self) -> Option<&HolidayDate> {
            None
        }
    }

    #[test]
    fn delegates_to_the_exposed_date() {
        let mut scheduled = HolidayDate::new(Date::from_ymd(2014, 8, 15).unwrap());
        scheduled.add_region("Saarland");
        let appointment = Appointment { scheduled };

        assert!(is_holiday(&appointment).unwrap());
        assert_eq!(holiday_name(&appointment).unwrap(), Some("assumption_day"));
    }

    #[test]
    fn missing_date_source_is_an_error() {
        assert_eq!(is_holiday(&Draft), Err(Error::MissingDateSource));
        assert_eq!(holiday_name(&Draft), Err(Error::MissingDateSource));
    }
}
