//! Norwegian public holiday set and memoizing calendar.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{EngineError, EngineResult};

use super::easter::easter_sunday;

/// The number of Norwegian public holidays in any year (5 fixed + 7 movable).
///
/// Two holidays may share a date: when Easter falls on March 23, Ascension
/// Day lands on May 1 together with Labour Day (e.g. 2008), so the number of
/// distinct holiday dates can be 11.
pub const HOLIDAYS_PER_YEAR: usize = 12;

/// Computes the full set of Norwegian public holidays for a year.
///
/// Returns the five fixed-date holidays plus the seven holidays derived from
/// Easter Sunday, keyed by date. Each date maps to the display names of the
/// holidays observed on it, in calendar-definition order; the list has more
/// than one entry when a movable holiday coincides with a fixed one.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::YearOutOfRange`] for years the
/// calendar cannot represent.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use crewplan_engine::calendar::holidays_in_year;
///
/// let holidays = holidays_in_year(2025).unwrap();
/// assert_eq!(holidays.values().map(Vec::len).sum::<usize>(), 12);
/// assert_eq!(
///     holidays[&NaiveDate::from_ymd_opt(2025, 5, 17).unwrap()],
///     vec!["Constitution Day"]
/// );
/// ```
pub fn holidays_in_year(year: i32) -> EngineResult<BTreeMap<NaiveDate, Vec<&'static str>>> {
    let easter = easter_sunday(year)?;
    let fixed = |month: u32, day: u32| {
        NaiveDate::from_ymd_opt(year, month, day).ok_or(EngineError::YearOutOfRange { year })
    };

    let entries = [
        (fixed(1, 1)?, "New Year's Day"),
        (easter - Duration::days(3), "Maundy Thursday"),
        (easter - Duration::days(2), "Good Friday"),
        (easter, "Easter Sunday"),
        (easter + Duration::days(1), "Easter Monday"),
        (fixed(5, 1)?, "Labour Day"),
        (fixed(5, 17)?, "Constitution Day"),
        (easter + Duration::days(39), "Ascension Day"),
        (easter + Duration::days(49), "Whit Sunday"),
        (easter + Duration::days(50), "Whit Monday"),
        (fixed(12, 25)?, "Christmas Day"),
        (fixed(12, 26)?, "Boxing Day"),
    ];

    let mut holidays: BTreeMap<NaiveDate, Vec<&'static str>> = BTreeMap::new();
    for (day, name) in entries {
        holidays.entry(day).or_default().push(name);
    }
    Ok(holidays)
}

/// A memoizing Norwegian holiday calendar.
///
/// Computes each year's holiday set at most once per cache instance and
/// answers point lookups against it. The cache is owned by the caller
/// (typically constructed once and shared behind an `Arc`), not a process-wide
/// singleton, so tests and concurrent call sites stay independent.
///
/// Concurrent lookups are safe: the cache is a read-through `RwLock` and a
/// race that computes the same year twice produces identical output.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use crewplan_engine::calendar::HolidayCalendar;
///
/// let calendar = HolidayCalendar::new();
/// let constitution_day = NaiveDate::from_ymd_opt(2025, 5, 17).unwrap();
/// assert!(calendar.is_holiday(constitution_day));
/// assert_eq!(calendar.holiday_names(constitution_day), vec!["Constitution Day"]);
/// ```
#[derive(Debug, Default)]
pub struct HolidayCalendar {
    years: RwLock<HashMap<i32, Arc<BTreeMap<NaiveDate, Vec<&'static str>>>>>,
}

impl HolidayCalendar {
    /// Creates an empty holiday calendar cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the holiday set for a year, computing and caching it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::YearOutOfRange`] for years the
    /// calendar cannot represent.
    pub fn holidays(&self, year: i32) -> EngineResult<Arc<BTreeMap<NaiveDate, Vec<&'static str>>>> {
        if let Some(holidays) = self
            .years
            .read()
            .expect("Holiday cache lock not poisoned")
            .get(&year)
        {
            return Ok(Arc::clone(holidays));
        }

        let holidays = Arc::new(holidays_in_year(year)?);
        let mut years = self.years.write().expect("Holiday cache lock not poisoned");
        // A concurrent writer may have beaten us here; keep the first entry.
        Ok(Arc::clone(years.entry(year).or_insert(holidays)))
    }

    /// Returns whether the given date is a Norwegian public holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        // The year of an existing date is always representable.
        self.holidays(date.year())
            .map(|holidays| holidays.contains_key(&date))
            .unwrap_or(false)
    }

    /// Returns the display names of the holidays on the given date.
    ///
    /// Empty for ordinary days; more than one entry when two holidays share
    /// the date.
    pub fn holiday_names(&self, date: NaiveDate) -> Vec<&'static str> {
        self.holidays(date.year())
            .ok()
            .and_then(|holidays| holidays.get(&date).cloned())
            .unwrap_or_default()
    }
}
