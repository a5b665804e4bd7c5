//! Wage result models for the Payroll Engine.
//!
//! This module contains the [`PayrollSummary`] type and its associated
//! structures that capture the outputs of a payroll run: one [`DailyWage`]
//! line per worked date, per-employee totals and the payroll total.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wages earned by one employee on one date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::DailyWage;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let line = DailyWage {
///     date: NaiveDate::from_ymd_opt(2024, 7, 14).unwrap(),
///     hours: Decimal::from(8),
///     rate: Decimal::from(25),
///     amount: Decimal::from(200),
/// };
/// assert_eq!(line.hours * line.rate, line.amount);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWage {
    /// The worked date.
    pub date: NaiveDate,
    /// Hours worked on the date.
    pub hours: Decimal,
    /// The hourly rate applied.
    pub rate: Decimal,
    /// `hours * rate`.
    pub amount: Decimal,
}

/// Wage totals for a single employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeWages {
    /// First and family name.
    pub full_name: String,
    /// Job title.
    pub title: String,
    /// Hourly pay rate.
    pub pay_per_hour: Decimal,
    /// One line per distinct time-in date, in first-appearance order.
    pub daily_wages: Vec<DailyWage>,
    /// Sum of hours across `daily_wages`.
    pub total_hours: Decimal,
    /// Sum of amounts across `daily_wages`.
    pub total_wages: Decimal,
}

/// The complete result of a payroll run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Unique identifier for this run.
    pub calculation_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the run.
    pub engine_version: String,
    /// Currency code the amounts are expressed in.
    pub currency: String,
    /// Per-employee results, in input order.
    pub employees: Vec<EmployeeWages>,
    /// Hours across all employees.
    pub total_hours: Decimal,
    /// Wages across all employees.
    pub total_payroll: Decimal,
    /// Time taken to compute the run, in microseconds.
    pub duration_us: u64,
}
