//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all payroll endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::Period;

use super::request::{CalculateRequest, SaveRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", get(list_handler).post(save_handler))
        .route("/payroll/calculate", post(calculate_handler))
        .route("/payroll/:id/recalculate", post(recalculate_handler))
        .route("/payroll/:id", delete(delete_handler))
        .with_state(state)
}

/// Query parameters for `GET /payroll`. Both must be present to filter.
#[derive(Debug, Deserialize)]
struct ListQuery {
    month: Option<u32>,
    year: Option<i32>,
}

/// Converts a JSON extraction failure into an API error body.
fn rejection_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for `POST /payroll/calculate`.
///
/// Creates a payroll record from scratch for one employee and period.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, "Rejected calculate request body");
            return (StatusCode::BAD_REQUEST, Json(rejection_error(rejection))).into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_id = request.employee_id,
        year = request.year,
        month = request.month,
        "Processing payroll calculation"
    );

    let result = state
        .ledger()
        .and_then(|mut ledger| ledger.calculate(request.employee_id, request.year, request.month));

    match result {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /payroll/:id/recalculate`.
///
/// Recomputes an existing record from current salary and attendance.
async fn recalculate_handler(
    State(state): State<AppState>,
    Path(payroll_id): Path<u64>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, payroll_id, "Processing payroll recalculation");

    let result = state
        .ledger()
        .and_then(|mut ledger| ledger.recalculate(payroll_id));

    match result {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Recalculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /payroll`.
///
/// Saves a caller-edited record: creates when no id is supplied, updates
/// otherwise. Net salary is recomputed server-side either way.
async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, "Rejected save request body");
            return (StatusCode::BAD_REQUEST, Json(rejection_error(rejection))).into_response();
        }
    };

    let creating = request.id == 0;
    info!(
        correlation_id = %correlation_id,
        payroll_id = request.id,
        employee_id = request.employee_id,
        creating,
        "Processing payroll save"
    );

    let result = state.ledger().and_then(|mut ledger| ledger.save(request.into()));

    match result {
        Ok(record) => {
            let status = if creating {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(record)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Save failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `DELETE /payroll/:id`.
async fn delete_handler(
    State(state): State<AppState>,
    Path(payroll_id): Path<u64>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, payroll_id, "Processing payroll deletion");

    let result = state
        .ledger()
        .and_then(|mut ledger| ledger.delete(payroll_id));

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Deletion failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /payroll`.
///
/// Lists records ordered most recent period first. Supplying both `month`
/// and `year` restricts the listing to that period; supplying only one of
/// them is a validation error.
async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let period = match (query.month, query.year) {
        (Some(month), Some(year)) => Some(Period::new(year, month)),
        (None, None) => None,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiError::validation_error(
                    "month and year must be supplied together",
                )),
            )
                .into_response();
        }
    };

    let result = state.ledger().and_then(|ledger| ledger.list(period));

    match result {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => ApiErrorResponse::from(err).into_response(),
    }
}
