//! Norwegian public holiday calendar.
//!
//! This module computes the complete set of Norwegian public holidays for a
//! given year, including the movable Easter-derived dates, and provides a
//! memoizing [`HolidayCalendar`] for repeated lookups.

mod easter;
mod holidays;

pub use easter::easter_sunday;
pub use holidays::{HOLIDAYS_PER_YEAR, HolidayCalendar, holidays_in_year};
