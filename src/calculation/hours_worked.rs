//! Hours worked calculation.
//!
//! Pairs the time-in and time-out events recorded for a date and derives the
//! hours between them.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, EventType};

/// Divisor turning a difference of `HHMM` numerals into hours.
pub const HHMM_UNITS_PER_HOUR: Decimal = Decimal::ONE_HUNDRED;

/// Calculates the hours an employee worked on `date`.
///
/// The first time-in and the first time-out recorded for the date are paired
/// and the hours are `(time_out.hour - time_in.hour) / 100`. Because the hour
/// values are raw `HHMM` numerals, the result is only elapsed time when both
/// events fall on the hour: `0900` to `1730` gives `8.3`, not `8.5`.
///
/// # Errors
///
/// - [`EngineError::DateNotFound`] if no event of either kind is on the date
/// - [`EngineError::UnpairedEvent`] if only one kind is
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::hours_worked_on_date;
/// use payroll_engine::models::{EmployeeRow, create_employee_record};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut employee = create_employee_record(EmployeeRow::new("John", "Doe", "Manager", Decimal::from(25)));
/// employee.create_time_in_event("2024-07-14 0900").unwrap();
/// employee.create_time_out_event("2024-07-14 1700").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2024, 7, 14).unwrap();
/// assert_eq!(hours_worked_on_date(&employee, date).unwrap(), Decimal::from(8));
/// ```
pub fn hours_worked_on_date(employee: &EmployeeRecord, date: NaiveDate) -> EngineResult<Decimal> {
    let time_in = employee.time_in_events().iter().find(|e| e.is_on(date));
    let time_out = employee.time_out_events().iter().find(|e| e.is_on(date));

    match (time_in, time_out) {
        (Some(time_in), Some(time_out)) => {
            Ok((Decimal::from(time_out.hour) - Decimal::from(time_in.hour)) / HHMM_UNITS_PER_HOUR)
        }
        (Some(_), None) => Err(EngineError::UnpairedEvent {
            date,
            missing: EventType::TimeOut,
        }),
        (None, Some(_)) => Err(EngineError::UnpairedEvent {
            date,
            missing: EventType::TimeIn,
        }),
        (None, None) => Err(EngineError::DateNotFound { date }),
    }
}
