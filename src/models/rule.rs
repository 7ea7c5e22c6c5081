//! Wage supplement rule model.

use std::str::FromStr;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// How a supplement's magnitude is interpreted.
///
/// # Example
///
/// ```
/// use crewplan_engine::models::SupplementKind;
///
/// let kind: SupplementKind = "percentage".parse().unwrap();
/// assert_eq!(kind, SupplementKind::Percentage);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementKind {
    /// Magnitude is percentage points applied to the base hourly rate,
    /// prorated over the overlap duration.
    Percentage,
    /// Magnitude is a fixed currency amount, paid once per qualifying shift.
    Fixed,
}

impl FromStr for SupplementKind {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s {
            "percentage" => Ok(SupplementKind::Percentage),
            "fixed" => Ok(SupplementKind::Fixed),
            other => Err(EngineError::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// The condition under which a supplement applies.
///
/// Unknown category strings arriving from configuration or API requests are
/// rejected with [`EngineError::UnknownCategory`] at the parsing boundary, so
/// inside the engine the set of categories is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementCategory {
    /// Night work; the applicable window is the rule's clock-time window.
    Night,
    /// Evening work; the applicable window is the rule's clock-time window.
    Evening,
    /// Saturday and Sunday, optionally narrowed by a clock-time window.
    Weekend,
    /// Norwegian public holidays, optionally narrowed by a clock-time window.
    Holiday,
}

impl FromStr for SupplementCategory {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s {
            "night" => Ok(SupplementCategory::Night),
            "evening" => Ok(SupplementCategory::Evening),
            "weekend" => Ok(SupplementCategory::Weekend),
            "holiday" => Ok(SupplementCategory::Holiday),
            other => Err(EngineError::UnknownCategory {
                category: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SupplementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupplementCategory::Night => write!(f, "night"),
            SupplementCategory::Evening => write!(f, "evening"),
            SupplementCategory::Weekend => write!(f, "weekend"),
            SupplementCategory::Holiday => write!(f, "holiday"),
        }
    }
}

/// A wage supplement rule.
///
/// Rules are read-only configuration supplied by the caller; the engine never
/// mutates them. Both clock-time bounds must be set together (or neither):
/// a window may cross midnight (`time_end < time_start`), in which case it
/// extends into the following calendar day; equal bounds describe an empty
/// window and such a rule never fires. Null bounds mean the supplement
/// applies whenever the category condition holds, e.g. all of a holiday day.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
/// use crewplan_engine::models::{SupplementCategory, SupplementKind, WageSupplementRule};
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
/// assert!(night.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageSupplementRule {
    /// Display name; also the deterministic tie-breaker for equal priorities.
    pub name: String,
    /// Whether the magnitude is a percentage or a fixed amount.
    pub kind: SupplementKind,
    /// Percentage points or fixed currency amount, per `kind`.
    pub magnitude: Decimal,
    /// The applicability condition.
    pub category: SupplementCategory,
    /// Optional clock-time window start.
    pub time_start: Option<NaiveTime>,
    /// Optional clock-time window end; `< time_start` crosses midnight.
    pub time_end: Option<NaiveTime>,
    /// Inactive rules are skipped entirely.
    pub active: bool,
    /// Evaluation/listing order; lower values come first.
    pub priority: i32,
}

impl WageSupplementRule {
    /// Checks the rule's internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRule`] if exactly one of the clock-time
    /// bounds is set; half a window is a configuration mistake, not a
    /// narrower window.
    pub fn validate(&self) -> EngineResult<()> {
        match (self.time_start, self.time_end) {
            (Some(_), None) => Err(EngineError::InvalidRule {
                rule: self.name.clone(),
                message: "time_start set without time_end".to_string(),
            }),
            (None, Some(_)) => Err(EngineError::InvalidRule {
                rule: self.name.clone(),
                message: "time_end set without time_start".to_string(),
            }),
            _ => Ok(()),
        }
    }
}
