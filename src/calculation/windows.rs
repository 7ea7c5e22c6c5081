//! Construction of a rule's concrete applicable windows.
//!
//! A supplement rule describes its window abstractly (a category plus an
//! optional clock-time window). For overlap computation the window must be
//! made concrete: actual start/end timestamps for every calendar day the
//! shift touches. A clock window may cross midnight (e.g. 23:00-06:00), so
//! windows are also anchored on the day before the shift starts; those spill
//! into the shift's first day.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::calendar::HolidayCalendar;
use crate::error::EngineResult;
use crate::models::{SupplementCategory, WageSupplementRule, WorkInterval};

use super::spans::{TimeSpan, intersect_spans, merge_spans};

/// Builds the merged, concrete applicable windows of a rule within reach of a
/// shift interval.
///
/// The result is the intersection of two span sets over the days from the day
/// before the shift start through the shift end day:
///
/// - the day-condition set: full Saturdays/Sundays for `weekend`, full
///   holiday days for `holiday` (consulting every touched year through the
///   calendar), every day for `night`/`evening`;
/// - the clock-window set: one concrete window per anchor day when both time
///   bounds are set, crossing midnight when `time_end < time_start`; equal
///   bounds are an empty window, and no constraint when both bounds are null.
///
/// A clock window on a `weekend` or `holiday` rule therefore narrows the day
/// condition conjunctively. The returned spans are sorted and disjoint, so
/// intersecting them with the shift cannot double-count any minute.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRule`] if exactly one of the
/// rule's clock-time bounds is set.
pub fn applicable_windows(
    rule: &WageSupplementRule,
    interval: &WorkInterval,
    calendar: &HolidayCalendar,
) -> EngineResult<Vec<TimeSpan>> {
    rule.validate()?;

    let first_day = interval.start().date() - Duration::days(1);
    let last_day = interval.end().date();

    let mut day_spans = Vec::new();
    let mut day = first_day;
    while day <= last_day {
        if day_condition_holds(rule.category, day, calendar) {
            day_spans.push(full_day(day));
        }
        day += Duration::days(1);
    }
    let day_spans = merge_spans(day_spans);

    let (Some(time_start), Some(time_end)) = (rule.time_start, rule.time_end) else {
        // No clock constraint: the day-condition set is the window.
        return Ok(day_spans);
    };

    let mut clock_spans = Vec::new();
    let mut day = first_day;
    while day <= last_day {
        let start = day.and_time(time_start);
        let end = if time_end >= time_start {
            // Equal bounds yield an empty span, filtered below.
            day.and_time(time_end)
        } else {
            // Crosses midnight into the following day.
            (day + Duration::days(1)).and_time(time_end)
        };
        if start < end {
            clock_spans.push(TimeSpan::new(start, end));
        }
        day += Duration::days(1);
    }

    Ok(intersect_spans(&day_spans, &merge_spans(clock_spans)))
}

/// Whether the rule category's day condition holds on a calendar day.
fn day_condition_holds(
    category: SupplementCategory,
    day: NaiveDate,
    calendar: &HolidayCalendar,
) -> bool {
    match category {
        // Night and evening are defined purely by their clock window.
        SupplementCategory::Night | SupplementCategory::Evening => true,
        SupplementCategory::Weekend => matches!(day.weekday(), Weekday::Sat | Weekday::Sun),
        SupplementCategory::Holiday => calendar.is_holiday(day),
    }
}

fn full_day(day: NaiveDate) -> TimeSpan {
    let midnight = day.and_hms_opt(0, 0, 0).expect("Valid midnight time");
    let next_midnight = (day + Duration::days(1))
        .and_hms_opt(0, 0, 0)
        .expect("Valid midnight time");
    TimeSpan::new(midnight, next_midnight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SupplementKind;
    use chrono::{NaiveDateTime, NaiveTime};
    use rust_decimal::Decimal;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_interval(start: (&str, &str), end: (&str, &str)) -> WorkInterval {
        WorkInterval::new(make_datetime(start.0, start.1), make_datetime(end.0, end.1)).unwrap()
    }

    fn rule(
        category: SupplementCategory,
        time_start: Option<(u32, u32)>,
        time_end: Option<(u32, u32)>,
    ) -> WageSupplementRule {
        WageSupplementRule {
            name: "test rule".to_string(),
            kind: SupplementKind::Percentage,
            magnitude: Decimal::new(25, 0),
            category,
            time_start: time_start.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
            time_end: time_end.map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap()),
            active: true,
            priority: 10,
        }
    }

    // ==========================================================================
    // WIN-001: midnight-crossing night window is anchored on each day
    // ==========================================================================
    #[test]
    fn test_win_001_night_window_crosses_midnight() {
        // Friday 22:00 -> Saturday 07:00
        let interval = make_interval(("2024-01-05", "22:00:00"), ("2024-01-06", "07:00:00"));
        let night = rule(SupplementCategory::Night, Some((23, 0)), Some((6, 0)));
        let calendar = HolidayCalendar::new();

        let windows = applicable_windows(&night, &interval, &calendar).unwrap();

        // Anchored on Jan 4, 5 and 6; the Jan 4 window ends before the shift
        // but is still a valid concrete window, and the Jan 6 window is
        // clipped at the end of the enumerated day range (past the shift end).
        assert_eq!(
            windows,
            vec![
                TimeSpan::new(
                    make_datetime("2024-01-04", "23:00:00"),
                    make_datetime("2024-01-05", "06:00:00")
                ),
                TimeSpan::new(
                    make_datetime("2024-01-05", "23:00:00"),
                    make_datetime("2024-01-06", "06:00:00")
                ),
                TimeSpan::new(
                    make_datetime("2024-01-06", "23:00:00"),
                    make_datetime("2024-01-07", "00:00:00")
                ),
            ]
        );
    }

    // ==========================================================================
    // WIN-002: same-day evening window
    // ==========================================================================
    #[test]
    fn test_win_002_evening_window_same_day() {
        let interval = make_interval(("2024-01-05", "12:00:00"), ("2024-01-05", "20:00:00"));
        let evening = rule(SupplementCategory::Evening, Some((17, 0)), Some((21, 0)));
        let calendar = HolidayCalendar::new();

        let windows = applicable_windows(&evening, &interval, &calendar).unwrap();
        assert!(windows.contains(&TimeSpan::new(
            make_datetime("2024-01-05", "17:00:00"),
            make_datetime("2024-01-05", "21:00:00")
        )));
    }

    // ==========================================================================
    // WIN-003: weekend without clock bounds covers full Saturday and Sunday
    // ==========================================================================
    #[test]
    fn test_win_003_weekend_full_days() {
        // Friday 22:00 -> Saturday 07:00; only Saturday is in reach.
        let interval = make_interval(("2024-01-05", "22:00:00"), ("2024-01-06", "07:00:00"));
        let weekend = rule(SupplementCategory::Weekend, None, None);
        let calendar = HolidayCalendar::new();

        let windows = applicable_windows(&weekend, &interval, &calendar).unwrap();
        assert_eq!(
            windows,
            vec![TimeSpan::new(
                make_datetime("2024-01-06", "00:00:00"),
                make_datetime("2024-01-07", "00:00:00")
            )]
        );
    }

    // ==========================================================================
    // WIN-004: clock bounds on a weekend rule apply conjunctively
    // ==========================================================================
    #[test]
    fn test_win_004_weekend_with_clock_bounds_is_conjunctive() {
        // Saturday and Sunday in range; night window crosses midnight.
        let interval = make_interval(("2024-01-06", "00:00:00"), ("2024-01-07", "23:59:00"));
        let weekend_night = rule(SupplementCategory::Weekend, Some((23, 0)), Some((6, 0)));
        let calendar = HolidayCalendar::new();

        let windows = applicable_windows(&weekend_night, &interval, &calendar).unwrap();

        // Friday 23:00 -> Saturday 06:00 is clipped to the Saturday part;
        // Sunday 23:00 -> Monday 06:00 is clipped to the Sunday part.
        assert_eq!(
            windows,
            vec![
                TimeSpan::new(
                    make_datetime("2024-01-06", "00:00:00"),
                    make_datetime("2024-01-06", "06:00:00")
                ),
                TimeSpan::new(
                    make_datetime("2024-01-06", "23:00:00"),
                    make_datetime("2024-01-07", "06:00:00")
                ),
                TimeSpan::new(
                    make_datetime("2024-01-07", "23:00:00"),
                    make_datetime("2024-01-08", "00:00:00")
                ),
            ]
        );
    }

    // ==========================================================================
    // WIN-005: holiday rule without bounds covers the whole holiday day
    // ==========================================================================
    #[test]
    fn test_win_005_holiday_full_day() {
        // 2024-05-17 is Constitution Day.
        let interval = make_interval(("2024-05-17", "08:00:00"), ("2024-05-17", "16:00:00"));
        let holiday = rule(SupplementCategory::Holiday, None, None);
        let calendar = HolidayCalendar::new();

        let windows = applicable_windows(&holiday, &interval, &calendar).unwrap();
        assert_eq!(
            windows,
            vec![TimeSpan::new(
                make_datetime("2024-05-17", "00:00:00"),
                make_datetime("2024-05-18", "00:00:00")
            )]
        );
    }

    // ==========================================================================
    // WIN-006: holiday rule consults both years across a year boundary
    // ==========================================================================
    #[test]
    fn test_win_006_holiday_across_year_boundary() {
        // New Year's Eve 20:00 -> New Year's Day 04:00; Jan 1 is a holiday.
        let interval = make_interval(("2024-12-31", "20:00:00"), ("2025-01-01", "04:00:00"));
        let holiday = rule(SupplementCategory::Holiday, None, None);
        let calendar = HolidayCalendar::new();

        let windows = applicable_windows(&holiday, &interval, &calendar).unwrap();
        assert_eq!(
            windows,
            vec![TimeSpan::new(
                make_datetime("2025-01-01", "00:00:00"),
                make_datetime("2025-01-02", "00:00:00")
            )]
        );
    }

    // ==========================================================================
    // WIN-007: night rule with null bounds degenerates to whole days
    // ==========================================================================
    #[test]
    fn test_win_007_night_without_bounds_covers_whole_days() {
        let interval = make_interval(("2024-01-05", "09:00:00"), ("2024-01-05", "17:00:00"));
        let night = rule(SupplementCategory::Night, None, None);
        let calendar = HolidayCalendar::new();

        let windows = applicable_windows(&night, &interval, &calendar).unwrap();
        // Jan 4 through Jan 5, merged into one continuous span.
        assert_eq!(
            windows,
            vec![TimeSpan::new(
                make_datetime("2024-01-04", "00:00:00"),
                make_datetime("2024-01-06", "00:00:00")
            )]
        );
    }

    // ==========================================================================
    // WIN-008: equal clock bounds yield no windows
    // ==========================================================================
    #[test]
    fn test_win_008_equal_bounds_yield_empty() {
        let interval = make_interval(("2024-01-05", "09:00:00"), ("2024-01-05", "17:00:00"));
        let degenerate = rule(SupplementCategory::Night, Some((6, 0)), Some((6, 0)));
        let calendar = HolidayCalendar::new();

        let windows = applicable_windows(&degenerate, &interval, &calendar).unwrap();
        assert!(windows.is_empty());
    }

    // ==========================================================================
    // WIN-009: half-set clock bounds are rejected
    // ==========================================================================
    #[test]
    fn test_win_009_half_set_bounds_rejected() {
        let interval = make_interval(("2024-01-05", "09:00:00"), ("2024-01-05", "17:00:00"));
        let broken = rule(SupplementCategory::Night, Some((23, 0)), None);
        let calendar = HolidayCalendar::new();

        assert!(applicable_windows(&broken, &interval, &calendar).is_err());
    }
}
