//! Request types for the wage supplement engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint. Kind and category arrive as strings and are converted into the
//! domain enums with distinct errors for unknown values.

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{WageSupplementRule, WorkInterval};

/// Request body for the `/calculate` endpoint.
///
/// Contains the worked shift, the base hourly rate, and optionally an inline
/// rule set that overrides the configured one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The worked shift.
    pub shift: ShiftRequest,
    /// The base hourly rate percentage supplements are computed from.
    pub base_hourly_rate: Decimal,
    /// Optional inline rules; when absent the configured rule set is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RuleRequest>>,
}

/// Shift information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Unique identifier for the shift, echoed in the response.
    pub id: String,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
}

/// Supplement rule information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleRequest {
    /// Display name of the supplement.
    pub name: String,
    /// "percentage" or "fixed".
    pub kind: String,
    /// Percentage points or fixed currency amount, per `kind`.
    pub magnitude: Decimal,
    /// "night", "evening", "weekend" or "holiday".
    pub category: String,
    /// Optional clock-time window start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_start: Option<NaiveTime>,
    /// Optional clock-time window end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_end: Option<NaiveTime>,
    /// Whether the rule is active; defaults to true.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Evaluation/listing order; lower values come first.
    pub priority: i32,
}

fn default_active() -> bool {
    true
}

impl ShiftRequest {
    /// Converts the shift into a validated work interval.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidInterval`] if the end
    /// precedes the start.
    pub fn into_interval(self) -> EngineResult<WorkInterval> {
        WorkInterval::new(self.start_time, self.end_time)
    }
}

impl RuleRequest {
    /// Converts the request rule into a validated domain rule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::UnknownKind`],
    /// [`crate::error::EngineError::UnknownCategory`] or
    /// [`crate::error::EngineError::InvalidRule`] for inconsistent input.
    pub fn into_rule(self) -> EngineResult<WageSupplementRule> {
        let rule = WageSupplementRule {
            name: self.name,
            kind: self.kind.parse()?,
            magnitude: self.magnitude,
            category: self.category.parse()?,
            time_start: self.time_start,
            time_end: self.time_end,
            active: self.active,
            priority: self.priority,
        };
        rule.validate()?;
        Ok(rule)
    }
}
