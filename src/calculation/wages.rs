//! Wage calculation for a single employee.
//!
//! This module turns hours worked into wages at the employee's hourly rate,
//! for one date or for every date the employee clocked in.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DailyWage, EmployeeRecord};

use super::hours_worked::hours_worked_on_date;

/// Calculates the wages an employee earned on `date`.
///
/// Wages are [`hours_worked_on_date`] multiplied by the hourly rate.
///
/// # Errors
///
/// Propagates the lookup errors of [`hours_worked_on_date`].
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::wages_earned_on_date;
/// use payroll_engine::models::{EmployeeRow, create_employee_record};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut employee = create_employee_record(EmployeeRow::new("John", "Doe", "Manager", Decimal::from(25)));
/// employee.create_time_in_event("2024-07-14 0900").unwrap();
/// employee.create_time_out_event("2024-07-14 1700").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 14).unwrap();
/// assert_eq!(wages_earned_on_date(&employee, date).unwrap(), Decimal::from(200));
/// ```
pub fn wages_earned_on_date(employee: &EmployeeRecord, date: NaiveDate) -> EngineResult<Decimal> {
    Ok(daily_wage(employee, date)?.amount)
}

/// Builds the wage line for one date.
///
/// # Errors
///
/// Propagates the lookup errors of [`hours_worked_on_date`], and returns
/// [`EngineError::AmountOverflow`] if hours times rate exceeds `Decimal`.
pub fn daily_wage(employee: &EmployeeRecord, date: NaiveDate) -> EngineResult<DailyWage> {
    let hours = hours_worked_on_date(employee, date)?;
    let rate = employee.pay_per_hour();
    let amount = hours
        .checked_mul(rate)
        .ok_or_else(|| EngineError::AmountOverflow {
            context: format!("wages for {} on {}", employee.full_name(), date),
        })?;

    Ok(DailyWage {
        date,
        hours,
        rate,
        amount,
    })
}

/// Builds one wage line per distinct time-in date, in first-appearance order.
///
/// Dates that only have a time-out event are skipped.
pub fn daily_wages(employee: &EmployeeRecord) -> EngineResult<Vec<DailyWage>> {
    employee
        .distinct_dates()
        .into_iter()
        .map(|date| daily_wage(employee, date))
        .collect()
}

/// Calculates an employee's wages across every date they clocked in.
///
/// An employee with no time-in events earns zero.
///
/// # Errors
///
/// Fails on the first clock-in date that has no matching clock-out.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::all_wages_for;
/// use payroll_engine::models::{EmployeeRow, create_employee_record};
/// use rust_decimal::Decimal;
///
/// let mut employee = create_employee_record(EmployeeRow::new("John", "Doe", "Manager", Decimal::from(25)));
/// employee.create_time_in_event("2024-07-14 0900").unwrap();
/// employee.create_time_out_event("2024-07-14 1700").unwrap();
/// employee.create_time_in_event("2024-07-15 0900").unwrap();
/// employee.create_time_out_event("2024-07-15 1500").unwrap();
///
/// assert_eq!(all_wages_for(&employee).unwrap(), Decimal::from(400));
/// ```
pub fn all_wages_for(employee: &EmployeeRecord) -> EngineResult<Decimal> {
    let lines = daily_wages(employee)?;
    let total = checked_total(lines.iter().map(|line| line.amount), || {
        format!("total wages for {}", employee.full_name())
    })?;

    debug!(
        employee = %employee.full_name(),
        dates = lines.len(),
        total = %total,
        "Calculated wages for employee"
    );

    Ok(total)
}

/// Adds up monetary amounts, failing with [`EngineError::AmountOverflow`]
/// instead of overflowing.
pub(crate) fn checked_total<I, F>(amounts: I, context: F) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
    F: Fn() -> String,
{
    amounts.into_iter().try_fold(Decimal::ZERO, |total, amount| {
        total
            .checked_add(amount)
            .ok_or_else(|| EngineError::AmountOverflow { context: context() })
    })
}
