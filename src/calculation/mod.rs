//! Calculation logic for the wage supplement engine.
//!
//! This module contains the span arithmetic used to merge and intersect time
//! windows, the construction of a rule's concrete applicable windows over the
//! days a shift touches, and the top-level supplement computation that turns
//! a shift, a rule set and a base hourly rate into supplement lines.

mod spans;
mod supplements;
mod windows;

pub use spans::{TimeSpan, intersect_spans, merge_spans, total_minutes};
pub use supplements::compute_supplements;
pub use windows::applicable_windows;
