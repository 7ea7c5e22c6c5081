//! Easter Sunday computation.
//!
//! Implements the anonymous Gregorian computus (Gauss Easter algorithm) used
//! to anchor the movable Norwegian holidays.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Computes the date of Easter Sunday for a given year.
///
/// Uses the anonymous Gregorian computus: closed-form integer arithmetic over
/// the 19-year metonic cycle, the century correction and the epact. Valid for
/// the proleptic Gregorian calendar; callers should not rely on it for
/// pre-Gregorian years.
///
/// # Errors
///
/// Returns [`EngineError::YearOutOfRange`] for years the calendar cannot
/// represent.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use crewplan_engine::calendar::easter_sunday;
///
/// assert_eq!(easter_sunday(2024).unwrap(), NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// assert_eq!(easter_sunday(2025).unwrap(), NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
/// ```
pub fn easter_sunday(year: i32) -> EngineResult<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // The computus only ever yields March 22 through April 25, so the only
    // way this fails is a year outside the representable range.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .ok_or(EngineError::YearOutOfRange { year })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // ==========================================================================
    // EA-001: Well-known Easter dates
    // ==========================================================================
    #[test]
    fn test_ea_001_known_easter_dates() {
        assert_eq!(easter_sunday(1999).unwrap(), date(1999, 4, 4));
        assert_eq!(easter_sunday(2000).unwrap(), date(2000, 4, 23));
        assert_eq!(easter_sunday(2011).unwrap(), date(2011, 4, 24));
        assert_eq!(easter_sunday(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025).unwrap(), date(2025, 4, 20));
        assert_eq!(easter_sunday(2026).unwrap(), date(2026, 4, 5));
    }

    // ==========================================================================
    // EA-002: Earliest and latest possible dates in the Gregorian cycle
    // ==========================================================================
    #[test]
    fn test_ea_002_extreme_easter_dates() {
        // 2008 is the earliest Easter (March 23) in living memory;
        // 2038 is the latest possible date (April 25).
        assert_eq!(easter_sunday(2008).unwrap(), date(2008, 3, 23));
        assert_eq!(easter_sunday(2038).unwrap(), date(2038, 4, 25));
    }

    // ==========================================================================
    // EA-003: Easter always falls between March 22 and April 25
    // ==========================================================================
    #[test]
    fn test_ea_003_easter_within_bounds() {
        for year in 1900..2200 {
            let easter = easter_sunday(year).unwrap();
            assert!(
                easter >= date(year, 3, 22) && easter <= date(year, 4, 25),
                "Easter {} out of bounds for year {}",
                easter,
                year
            );
        }
    }

    // ==========================================================================
    // EA-004: Easter is always a Sunday
    // ==========================================================================
    #[test]
    fn test_ea_004_easter_is_a_sunday() {
        use chrono::{Datelike, Weekday};
        for year in 1900..2200 {
            assert_eq!(easter_sunday(year).unwrap().weekday(), Weekday::Sun);
        }
    }

    // ==========================================================================
    // EA-005: unrepresentable years are an error, not a panic
    // ==========================================================================
    #[test]
    fn test_ea_005_out_of_range_year_is_error() {
        assert!(matches!(
            easter_sunday(300_000).unwrap_err(),
            EngineError::YearOutOfRange { year: 300_000 }
        ));
        assert!(matches!(
            easter_sunday(-300_000).unwrap_err(),
            EngineError::YearOutOfRange { .. }
        ));
    }
}
