//! Supplement calculation result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{SupplementCategory, SupplementKind};

/// The outcome of applying a single supplement rule to a shift.
///
/// One line is emitted per active rule whose applicable window overlaps the
/// shift for at least one minute. Lines are ordered by rule priority
/// ascending, ties broken by rule name.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use crewplan_engine::models::{SupplementCategory, SupplementKind, SupplementLine};
///
/// let line = SupplementLine {
///     rule_name: "Night supplement".to_string(),
///     category: SupplementCategory::Night,
///     kind: SupplementKind::Percentage,
///     priority: 10,
///     overlap_minutes: 420,
///     amount: Decimal::new(350, 0),
/// };
/// assert_eq!(line.overlap_minutes, 420);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementLine {
    /// The name of the rule that produced this line.
    pub rule_name: String,
    /// The rule's applicability category.
    pub category: SupplementCategory,
    /// Whether the amount is percentage-based or fixed.
    pub kind: SupplementKind,
    /// The rule's priority, echoed for traceability.
    pub priority: i32,
    /// Overlap between the shift and the rule's window, in minutes.
    pub overlap_minutes: i64,
    /// The resulting supplement amount.
    pub amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplement_line_serialization() {
        let line = SupplementLine {
            rule_name: "Weekend supplement".to_string(),
            category: SupplementCategory::Weekend,
            kind: SupplementKind::Percentage,
            priority: 20,
            overlap_minutes: 420,
            amount: Decimal::new(700, 0),
        };

        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"category\":\"weekend\""));
        assert!(json.contains("\"overlap_minutes\":420"));
        assert!(json.contains("\"amount\":\"700\""));

        let deserialized: SupplementLine = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, line);
    }
}
