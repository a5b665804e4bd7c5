//! Core data models for the Payroll Engine.
//!
//! This module contains the employee record, time events and wage results
//! used throughout the engine.

mod employee;
mod time_event;
mod wages;

pub use employee::{EmployeeRecord, EmployeeRow, create_employee_record, create_employee_records};
pub use time_event::{EventType, TimeEvent};
pub use wages::{DailyWage, EmployeeWages, PayrollSummary};
