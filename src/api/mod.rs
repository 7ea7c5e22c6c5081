//! HTTP API module for the wage supplement engine.
//!
//! This module provides the REST API endpoints for calculating wage
//! supplements and querying the Norwegian holiday calendar.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RuleRequest, ShiftRequest};
pub use response::{ApiError, CalculationResponse, HolidaysResponse};
pub use state::AppState;
