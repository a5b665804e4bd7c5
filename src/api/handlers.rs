//! HTTP request handlers for the Payroll Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{daily_wage, round_money, summarize_payroll};
use crate::error::EngineResult;
use crate::models::EmployeeRecord;
use crate::timestamp::parse_date;

use super::request::{PayrollRequest, TimesheetRequest, WagesRequest};
use super::response::{ApiError, ApiErrorResponse, WagesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/wages", post(wages_handler))
        .with_state(state)
}

/// Handler for POST /payroll endpoint.
///
/// Builds every employee record from the request and returns the payroll
/// summary.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let employees = match build_records(request.employees) {
        Ok(employees) => employees,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid timesheet");
            return error_response(err.into());
        }
    };

    match summarize_payroll(&employees, state.config()) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                employees_count = employees.len(),
                total_payroll = %summary.total_payroll,
                duration_us = summary.duration_us,
                "Payroll completed successfully"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll failed");
            error_response(err.into())
        }
    }
}

/// Handler for POST /wages endpoint.
///
/// Returns one employee's hours and wages for a single date.
async fn wages_handler(
    State(state): State<AppState>,
    payload: Result<Json<WagesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing wages request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let result = parse_date(&request.date).and_then(|date| {
        let employee = request.employee.into_record()?;
        let line = daily_wage(&employee, date)?;
        Ok(WagesResponse {
            full_name: employee.full_name(),
            date: line.date,
            hours: line.hours,
            rate: line.rate,
            amount: round_money(line.amount, config.money_decimal_places),
            currency: config.currency.clone(),
        })
    });

    match result {
        Ok(wages) => {
            info!(
                correlation_id = %correlation_id,
                date = %wages.date,
                amount = %wages.amount,
                "Wages calculated successfully"
            );
            json_response(StatusCode::OK, wages)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Wages calculation failed");
            error_response(err.into())
        }
    }
}

fn build_records(timesheets: Vec<TimesheetRequest>) -> EngineResult<Vec<EmployeeRecord>> {
    timesheets
        .into_iter()
        .map(TimesheetRequest::into_record)
        .collect()
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    api_error.into_response()
}

/// Maps a JSON extraction failure to a 400 response.
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
    json_response(StatusCode::BAD_REQUEST, error)
}
