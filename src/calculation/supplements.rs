//! Top-level wage supplement computation.

use rust_decimal::Decimal;

use crate::calendar::HolidayCalendar;
use crate::error::EngineResult;
use crate::models::{SupplementKind, SupplementLine, WageSupplementRule, WorkInterval};

use super::spans::{TimeSpan, intersect_spans, total_minutes};
use super::windows::applicable_windows;

/// Computes the wage supplements earned by a shift.
///
/// Evaluates every active rule against the shift interval and returns one
/// [`SupplementLine`] per rule whose applicable window overlaps the shift for
/// at least one minute. Lines are ordered by rule priority ascending, ties
/// broken by rule name, so output is deterministic for any rule ordering on
/// input.
///
/// Rules are independent: several rules (even of the same category) may fire
/// for the same minutes, and the supplements stack. Per rule the overlap
/// never exceeds the shift duration, because the rule's windows are merged
/// before they are intersected with the shift.
///
/// Amounts:
/// - percentage rules: `base_hourly_rate * overlap_hours * magnitude / 100`;
/// - fixed rules: `magnitude`, once per qualifying shift regardless of how
///   much of the window is covered.
///
/// # Errors
///
/// Returns an error if a rule carries only one clock-time bound
/// ([`crate::error::EngineError::InvalidRule`]). A zero-length interval is
/// not an error; it yields an empty result.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDateTime, NaiveTime};
/// use rust_decimal::Decimal;
/// use crewplan_engine::calculation::compute_supplements;
/// use crewplan_engine::calendar::HolidayCalendar;
/// use crewplan_engine::models::{
///     SupplementCategory, SupplementKind, WageSupplementRule, WorkInterval,
/// };
///
/// let interval = WorkInterval::new(
///     NaiveDateTime::parse_from_str("2024-01-05 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     NaiveDateTime::parse_from_str("2024-01-06 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
/// ).unwrap();
///
/// let night = WageSupplementRule {
///     name: "Night supplement".to_string(),
///     kind: SupplementKind::Percentage,
///     magnitude: Decimal::new(25, 0),
///     category: SupplementCategory::Night,
///     time_start: NaiveTime::from_hms_opt(23, 0, 0),
///     time_end: NaiveTime::from_hms_opt(6, 0, 0),
///     active: true,
///     priority: 10,
/// };
///
/// let calendar = HolidayCalendar::new();
/// let lines = compute_supplements(&interval, &[night], Decimal::new(200, 0), &calendar).unwrap();
///
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].overlap_minutes, 420); // 23:00 -> 06:00
/// assert_eq!(lines[0].amount, Decimal::new(350, 0)); // 200 * 7h * 25%
/// ```
pub fn compute_supplements(
    interval: &WorkInterval,
    rules: &[WageSupplementRule],
    base_hourly_rate: Decimal,
    calendar: &HolidayCalendar,
) -> EngineResult<Vec<SupplementLine>> {
    let mut active: Vec<&WageSupplementRule> = rules.iter().filter(|r| r.active).collect();
    active.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(&b.name)));

    let shift = [TimeSpan::new(interval.start(), interval.end())];

    let mut lines = Vec::new();
    for rule in active {
        let windows = applicable_windows(rule, interval, calendar)?;
        let overlap_minutes = total_minutes(&intersect_spans(&shift, &windows));
        if overlap_minutes == 0 {
            continue;
        }

        lines.push(SupplementLine {
            rule_name: rule.name.clone(),
            category: rule.category,
            kind: rule.kind,
            priority: rule.priority,
            overlap_minutes,
            amount: supplement_amount(rule, overlap_minutes, base_hourly_rate),
        });
    }

    Ok(lines)
}

/// The monetary amount for a rule with a known non-zero overlap.
fn supplement_amount(
    rule: &WageSupplementRule,
    overlap_minutes: i64,
    base_hourly_rate: Decimal,
) -> Decimal {
    match rule.kind {
        SupplementKind::Percentage => {
            let overlap_hours = Decimal::new(overlap_minutes, 0) / Decimal::new(60, 0);
            base_hourly_rate * overlap_hours * rule.magnitude / Decimal::new(100, 0)
        }
        // Fixed supplements are an all-or-nothing bonus for touching the
        // window at all, not prorated over the overlap.
        SupplementKind::Fixed => rule.magnitude,
    }
}
