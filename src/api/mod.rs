//! HTTP API module for the Payroll Engine.
//!
//! This module provides the REST API endpoints for running payroll and
//! calculating an employee's wages for a date.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayrollRequest, TimesheetRequest, WagesRequest};
pub use response::{ApiError, WagesResponse};
pub use state::AppState;
