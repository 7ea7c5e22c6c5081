//! HTTP request handlers for the wage supplement engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_supplements;
use crate::error::EngineResult;
use crate::models::WageSupplementRule;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, HolidaysResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/holidays/:year", get(holidays_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a shift, a base hourly rate and optionally an inline rule set,
/// and returns the supplement lines earned by the shift.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    let shift_id = request.shift.id.clone();

    match perform_calculation(request, &state) {
        Ok(response) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                shift_id = %response.shift_id,
                supplement_count = response.supplements.len(),
                total_amount = %response.total_amount,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                shift_id = %shift_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Performs the supplement calculation for a request.
fn perform_calculation(
    request: CalculationRequest,
    state: &AppState,
) -> EngineResult<CalculationResponse> {
    let shift_id = request.shift.id.clone();
    let interval = request.shift.into_interval()?;

    // Inline rules override the configured set when present.
    let rules: Vec<WageSupplementRule> = match request.rules {
        Some(inline) => inline
            .into_iter()
            .map(|r| r.into_rule())
            .collect::<EngineResult<Vec<_>>>()?,
        None => state.config().rules().to_vec(),
    };

    let supplements = compute_supplements(
        &interval,
        &rules,
        request.base_hourly_rate,
        state.calendar(),
    )?;
    let total_amount = supplements.iter().map(|line| line.amount).sum();

    Ok(CalculationResponse {
        calculation_id: Uuid::new_v4(),
        calculated_at: Utc::now(),
        shift_id,
        shift_minutes: interval.duration_minutes(),
        supplements,
        total_amount,
    })
}

/// Handler for GET /holidays/:year endpoint.
///
/// Returns the full Norwegian public holiday set for a year. Dates shared by
/// two holidays list both names.
async fn holidays_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    match state.calendar().holidays(year) {
        Ok(holidays) => {
            let holidays = holidays
                .iter()
                .map(|(date, names)| (date.format("%Y-%m-%d").to_string(), names.join(", ")))
                .collect();

            info!(year, "Holiday calendar request");

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(HolidaysResponse { year, holidays }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(year, error = %err, "Holiday calendar request failed");
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
