//! Payroll aggregation across employees.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;
use uuid::Uuid;

use crate::config::PayrollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{DailyWage, EmployeeRecord, EmployeeWages, PayrollSummary};

use super::wages::{all_wages_for, checked_total, daily_wages};

/// Sums [`all_wages_for`] over every employee, in order.
///
/// An empty slice yields zero.
///
/// # Errors
///
/// Returns the error of the first employee whose wages cannot be calculated,
/// or [`EngineError::AmountOverflow`] if the total exceeds `Decimal`.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::models::{EmployeeRow, create_employee_records};
/// use rust_decimal::Decimal;
///
/// let mut employees = create_employee_records(vec![
///     EmployeeRow::new("John", "Doe", "Manager", Decimal::from(25)),
///     EmployeeRow::new("Jane", "Smith", "Developer", Decimal::from(30)),
/// ]);
/// for employee in &mut employees {
///     employee.create_time_in_event("2024-07-14 0900").unwrap();
///     employee.create_time_out_event("2024-07-14 1700").unwrap();
/// }
///
/// assert_eq!(calculate_payroll(&employees).unwrap(), Decimal::from(440));
/// assert_eq!(calculate_payroll(&[]).unwrap(), Decimal::ZERO);
/// ```
pub fn calculate_payroll(employees: &[EmployeeRecord]) -> EngineResult<Decimal> {
    employees
        .iter()
        .try_fold(Decimal::ZERO, |total, employee| {
            total
                .checked_add(all_wages_for(employee)?)
                .ok_or_else(payroll_overflow)
        })
}

/// Runs payroll and returns the per-employee breakdown.
///
/// Totals are computed from unrounded amounts; each reported amount is then
/// rounded to `config.money_decimal_places` with midpoints away from zero.
///
/// # Errors
///
/// Returns the error of the first employee whose wages cannot be calculated.
pub fn summarize_payroll(
    employees: &[EmployeeRecord],
    config: &PayrollConfig,
) -> EngineResult<PayrollSummary> {
    let start_time = Instant::now();
    let dp = config.money_decimal_places;

    let mut results = Vec::with_capacity(employees.len());
    let mut total_hours = Decimal::ZERO;
    let mut total_payroll = Decimal::ZERO;

    for employee in employees {
        let lines = daily_wages(employee)?;
        let employee_hours: Decimal = lines.iter().map(|line| line.hours).sum();
        let employee_wages = checked_total(lines.iter().map(|line| line.amount), || {
            format!("total wages for {}", employee.full_name())
        })?;

        total_hours += employee_hours;
        total_payroll = total_payroll
            .checked_add(employee_wages)
            .ok_or_else(payroll_overflow)?;

        debug!(
            employee = %employee.full_name(),
            dates = lines.len(),
            total_wages = %employee_wages,
            "Summarized employee wages"
        );

        results.push(EmployeeWages {
            full_name: employee.full_name(),
            title: employee.title().to_string(),
            pay_per_hour: employee.pay_per_hour(),
            daily_wages: lines
                .into_iter()
                .map(|line| DailyWage {
                    amount: round_money(line.amount, dp),
                    ..line
                })
                .collect(),
            total_hours: employee_hours,
            total_wages: round_money(employee_wages, dp),
        });
    }

    Ok(PayrollSummary {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        currency: config.currency.clone(),
        employees: results,
        total_hours,
        total_payroll: round_money(total_payroll, dp),
        duration_us: u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX),
    })
}

fn payroll_overflow() -> EngineError {
    EngineError::AmountOverflow {
        context: "payroll total".to_string(),
    }
}

/// Rounds a monetary amount to `dp` places, midpoints away from zero.
pub(crate) fn round_money(amount: Decimal, dp: u32) -> Decimal {
    amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
