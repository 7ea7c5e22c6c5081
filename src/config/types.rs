//! Configuration types for wage supplement rule sets.
//!
//! This module contains the raw structures deserialized from YAML
//! configuration files. Kind and category arrive as strings and are only
//! converted to the closed domain enums by the loader, so that unknown
//! values surface as distinct configuration errors instead of opaque
//! deserialization failures.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::EngineResult;
use crate::models::WageSupplementRule;

/// Metadata about a supplement rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplementMetadata {
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// The currency the fixed amounts and base rates are denominated in.
    pub currency: String,
}

/// A single supplement rule as written in the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplementEntry {
    /// Display name of the supplement.
    pub name: String,
    /// "percentage" or "fixed".
    pub kind: String,
    /// Percentage points or fixed currency amount, per `kind`.
    pub magnitude: Decimal,
    /// "night", "evening", "weekend" or "holiday".
    pub category: String,
    /// Optional clock-time window start.
    #[serde(default)]
    pub time_start: Option<NaiveTime>,
    /// Optional clock-time window end.
    #[serde(default)]
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

/// The supplements configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplementsConfig {
    /// Rule set metadata.
    pub metadata: SupplementMetadata,
    /// The supplement rule entries.
    pub supplements: Vec<SupplementEntry>,
}

impl SupplementEntry {
    /// Converts the raw entry into a validated domain rule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::UnknownKind`] or
    /// [`crate::error::EngineError::UnknownCategory`] for unrecognized kind
    /// or category strings, and
    /// [`crate::error::EngineError::InvalidRule`] for half-set clock bounds.
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
