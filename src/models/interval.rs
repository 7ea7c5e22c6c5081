//! Work interval model.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// A concrete worked shift interval.
///
/// The interval may lie within a single calendar day or cross midnight into
/// the next. Construction enforces that the end does not precede the start;
/// a zero-length interval is legal and simply yields no supplements.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use crewplan_engine::models::WorkInterval;
///
/// let start = NaiveDateTime::parse_from_str("2024-01-05 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2024-01-06 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let interval = WorkInterval::new(start, end).unwrap();
/// assert_eq!(interval.duration_minutes(), 540);
/// ```
// Serialize only: deserialization must go through `new` so the end-precedes-
// start check cannot be bypassed. The API layer converts request DTOs instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl WorkInterval {
    /// Creates a work interval, rejecting an end that precedes the start.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInterval`] if `end < start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidInterval {
                message: format!("end {} precedes start {}", end, start),
            });
        }
        Ok(Self { start, end })
    }

    /// The start of the interval.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// The end of the interval.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// The total duration of the interval in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
