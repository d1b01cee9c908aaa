//! Movable-feast calendar math: Easter Sunday and Penance Day.

use crate::date::Date;
use feiertage_core::{ensure, errors::Result};

/// Return Gregorian Easter Sunday for `year`.
///
/// Uses the Gauss congruence method: Easter falls on the (D + e + 1)-th day
/// after March 21.  Valid for any year from 1583 (Gregorian adoption)
/// through [`Date::MAX`].
pub fn easter_sunday(year: u16) -> Result<Date> {
    ensure!(
        year >= 1583,
        "Easter is undefined before the Gregorian reform (year {year})"
    );
    let y = year as i32;

    let a = y % 19;
    let b = y % 4;
    let c = y % 7;
    let m = (8 * (y / 100) + 13) / 25 - 2;
    let s = y / 100 - y / 400 - 2;
    let big_m = (15 + s - m) % 30;
    let big_n = (6 + s) % 7;
    let d = (big_m + 19 * a) % 30;

    // Two exceptions keep Easter within April 25.
    let big_d = if d == 29 {
        28
    } else if d == 28 && a >= 11 {
        27
    } else {
        d
    };

    let e = (2 * b + 4 * c + 6 * big_d + big_n) % 7;

    Date::from_ymd(year, 3, 21)?.add_days(big_d + e + 1)
}

/// Return Penance Day (Buß- und Bettag) for `year`.
///
/// The Wednesday eleven days before the first Advent Sunday, derived from
/// the weekday of December 25.
pub fn penance_day(year: u16) -> Result<Date> {
    let dec25 = Date::from_ymd(year, 12, 25)?;
    // Weekday with Sunday = 0 … Saturday = 6.
    let wday = i32::from(dec25.weekday().ordinal()) % 7;
    if wday == 0 {
        dec25.add_days(-39)
    } else {
        dec25.add_days(-wday - 32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn ymd(date: Date) -> (u16, u8, u8) {
        (date.year(), date.month(), date.day_of_month())
    }

    #[test]
    fn easter_known_dates() {
        let expected = [
            (1583, 4, 10),
            (2012, 4, 8),
            (2013, 3, 31),
            (2014, 4, 20),
            (2015, 4, 5),
            (2016, 3, 27),
            (2017, 4, 16),
            (2018, 4, 1),
            (2019, 4, 21),
            (2020, 4, 12),
            (2023, 4, 9),
            (2024, 3, 31),
        ];
        for (y, m, d) in expected {
            assert_eq!(ymd(easter_sunday(y).unwrap()), (y, m, d), "Easter {y}");
        }
    }

    #[test]
    fn easter_correction_years() {
        // d == 29 exception: Easter 1954 and 2049 fall on April 18, not 25.
        assert_eq!(ymd(easter_sunday(1954).unwrap()), (1954, 4, 18));
        assert_eq!(ymd(easter_sunday(2049).unwrap()), (2049, 4, 18));
    }

    #[test]
    fn easter_rejects_pre_gregorian_years() {
        assert!(easter_sunday(1582).is_err());
        assert!(easter_sunday(1000).is_err());
    }

    #[test]
    fn penance_day_known_dates() {
        let expected = [
            (2012, 11, 21),
            (2013, 11, 20),
            (2014, 11, 19),
            (2015, 11, 18),
            (2016, 11, 16),
            (2017, 11, 22),
            (2018, 11, 21),
            (2019, 11, 20),
            (2020, 11, 18),
        ];
        for (y, m, d) in expected {
            assert_eq!(ymd(penance_day(y).unwrap()), (y, m, d), "Penance Day {y}");
        }
    }

    #[test]
    fn penance_day_when_christmas_is_sunday() {
        // 2022-12-25 is a Sunday; Penance Day is November 16.
        assert_eq!(ymd(penance_day(2022).unwrap()), (2022, 11, 16));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn easter_is_a_sunday_in_window(year in 1583u16..=2998) {
                let easter = easter_sunday(year).unwrap();
                prop_assert_eq!(easter.weekday(), Weekday::Sunday);
                let (m, d) = (easter.month(), easter.day_of_month());
                prop_assert!(
                    (m == 3 && d >= 22) || (m == 4 && d <= 25),
                    "Easter {} out of window: {:?}", year, easter
                );
            }

            #[test]
            fn penance_day_precedes_advent(year in 1583u16..=2998) {
                let penance = penance_day(year).unwrap();
                prop_assert_eq!(penance.weekday(), Weekday::Wednesday);

                // Eleven days later is the first Advent Sunday, which is the
                // fourth Sunday before Christmas.
                let advent1 = penance.add_days(11).unwrap();
                prop_assert_eq!(advent1.weekday(), Weekday::Sunday);
                let advent4 = advent1.add_days(21).unwrap();
                let dec25 = Date::from_ymd(year, 12, 25).unwrap();
                let gap = advent4.days_between(dec25);
                prop_assert!((1..=7).contains(&gap));
            }
        }
    }
}
