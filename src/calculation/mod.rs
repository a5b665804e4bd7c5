//! Calculation logic for the Payroll Engine.
//!
//! This module derives hours worked from paired time-in/time-out events,
//! turns hours into wages for one date or all dates of an employee, and
//! aggregates wages into a payroll total across employees.

mod hours_worked;
mod payroll;
mod wages;

pub use hours_worked::{HHMM_UNITS_PER_HOUR, hours_worked_on_date};
pub use payroll::{calculate_payroll, summarize_payroll};
pub(crate) use payroll::round_money;
pub use wages::{all_wages_for, daily_wage, daily_wages, wages_earned_on_date};
