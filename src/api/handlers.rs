//! HTTP request handlers for the Staffing Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::ledger::Ledger;
use crate::workflow::{
    HireRequest, PerformanceRequest, hire_employee, score_commercial_performance,
};

use super::response::{ApiError, ApiErrorResponse, EmployeeView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(hire_handler))
        .route("/employees/:matricule", get(employee_handler))
        .route("/performance", post(performance_handler))
        .with_state(state)
}

/// Handler for POST /employees.
///
/// Hires an employee dated today and returns the persisted record.
async fn hire_handler(
    State(state): State<AppState>,
    payload: Result<Json<HireRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing hire request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let hire_date = Local::now().date_naive();
    let result = state
        .with_ledger_lock(|ledger, config| hire_employee(ledger, config, request, hire_date));

    match result {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                matricule = %outcome.employee.matricule,
                salary = %outcome.employee.salary,
                "Hire completed successfully"
            );
            (StatusCode::CREATED, Json(outcome)).into_response()
        }
        Err(err) => error_response(err, correlation_id, "Hire failed"),
    }
}

/// Handler for GET /employees/{matricule}.
async fn employee_handler(
    State(state): State<AppState>,
    Path(matricule): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let result = state.with_ledger_lock(|ledger, _| {
        ledger
            .find_by_matricule(&matricule)?
            .ok_or_else(|| EngineError::NotFound {
                matricule: matricule.clone(),
            })
    });

    match result {
        Ok(employee) => {
            let years_of_service = employee.years_of_service(Local::now().date_naive());
            Json(EmployeeView {
                employee,
                years_of_service,
            })
            .into_response()
        }
        Err(err) => error_response(err, correlation_id, "Employee lookup failed"),
    }
}

/// Handler for POST /performance.
///
/// Rescores a commercial employee from realized and target revenue.
async fn performance_handler(
    State(state): State<AppState>,
    payload: Result<Json<PerformanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing performance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let result = state
        .with_ledger_lock(|ledger, config| score_commercial_performance(ledger, config, &request));

    match result {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                matricule = %outcome.employee.matricule,
                performance = outcome.employee.performance,
                "Performance scoring completed successfully"
            );
            Json(outcome).into_response()
        }
        Err(err) => error_response(err, correlation_id, "Performance scoring failed"),
    }
}

/// Turns an engine error into its HTTP response, logging it.
fn error_response(err: EngineError, correlation_id: Uuid, context: &'static str) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "{}", context);
    ApiErrorResponse::from(err).into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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

    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}
