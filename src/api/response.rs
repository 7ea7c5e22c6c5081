//! Response types for the wage supplement engine API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP status codes.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::SupplementLine;

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// The shift identifier from the request.
    pub shift_id: String,
    /// The total shift duration in minutes.
    pub shift_minutes: i64,
    /// One line per rule with a non-zero overlap, ordered by priority.
    pub supplements: Vec<SupplementLine>,
    /// The sum of all supplement amounts.
    pub total_amount: Decimal,
}

/// Response body for the `/holidays/:year` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidaysResponse {
    /// The queried year.
    pub year: i32,
    /// Holiday dates in "YYYY-MM-DD" form mapped to display names.
    pub holidays: BTreeMap<String, String>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidInterval { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INTERVAL",
                    format!("Invalid work interval: {}", message),
                    "The shift end must not precede its start",
                ),
            },
            EngineError::InvalidRule { rule, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RULE",
                    format!("Invalid supplement rule '{}': {}", rule, message),
                    "The rule configuration contains inconsistent information",
                ),
            },
            EngineError::UnknownCategory { category } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_CATEGORY",
                    format!("Unknown supplement category: {}", category),
                    "Supported categories are night, evening, weekend and holiday",
                ),
            },
            EngineError::UnknownKind { kind } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_KIND",
                    format!("Unknown supplement kind: {}", kind),
                    "Supported kinds are percentage and fixed",
                ),
            },
            EngineError::YearOutOfRange { year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "YEAR_OUT_OF_RANGE",
                    format!("Year out of supported range: {}", year),
                    "The requested year cannot be represented in the calendar",
                ),
            },
        }
    }
}
