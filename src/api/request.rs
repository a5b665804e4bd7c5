//! Request types for the Payroll Engine API.
//!
//! This module defines the JSON request structures for the `/payroll` and
//! `/wages` endpoints.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{EmployeeRecord, EmployeeRow, create_employee_record};

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employees to run payroll for, in reporting order.
    pub employees: Vec<TimesheetRequest>,
}

/// One employee and the clock events recorded for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// Positional record fields: `[first_name, family_name, title, pay_per_hour]`.
    pub record: EmployeeRow,
    /// Clock-in timestamps (`"YYYY-MM-DD HHMM"`), in recording order.
    #[serde(default)]
    pub time_in: Vec<String>,
    /// Clock-out timestamps (`"YYYY-MM-DD HHMM"`), in recording order.
    #[serde(default)]
    pub time_out: Vec<String>,
}

impl TimesheetRequest {
    /// Builds the employee record and records every event on it.
    ///
    /// Fails on the first malformed timestamp.
    pub fn into_record(self) -> EngineResult<EmployeeRecord> {
        let mut employee = create_employee_record(self.record);
        for timestamp in &self.time_in {
            employee.create_time_in_event(timestamp)?;
        }
        for timestamp in &self.time_out {
            employee.create_time_out_event(timestamp)?;
        }
        Ok(employee)
    }
}

/// Request body for the `/wages` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WagesRequest {
    /// The employee and their events.
    pub employee: TimesheetRequest,
    /// The date to calculate wages for (`"YYYY-MM-DD"`).
    pub date: String,
}
