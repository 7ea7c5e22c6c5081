//! Value types for the wage supplement engine.
//!
//! This module defines the work interval, supplement rule and supplement
//! result types that the calculation functions operate on.

mod interval;
mod rule;
mod supplement_result;

pub use interval::WorkInterval;
pub use rule::{SupplementCategory, SupplementKind, WageSupplementRule};
pub use supplement_result::SupplementLine;
