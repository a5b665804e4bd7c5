//! Employee record model and factories.
//!
//! This module defines the [`EmployeeRecord`] struct holding an hourly
//! employee's identity, pay rate and recorded clock events, along with the
//! factories that build records from positional rows.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TimeEvent;

/// The four positional fields an employee record is created from:
/// first name, family name, title and hourly pay rate.
///
/// Deserializes from a JSON array such as `["John", "Doe", "Manager", 25]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRow(pub String, pub String, pub String, pub Decimal);

impl EmployeeRow {
    /// Creates a row from its four fields.
    pub fn new(
        first_name: impl Into<String>,
        family_name: impl Into<String>,
        title: impl Into<String>,
        pay_per_hour: Decimal,
    ) -> Self {
        Self(
            first_name.into(),
            family_name.into(),
            title.into(),
            pay_per_hour,
        )
    }
}

/// An hourly employee and the clock events recorded against them.
///
/// Identity and pay rate are fixed at creation. Time-in and time-out events
/// only grow, in the order they were recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    first_name: String,
    family_name: String,
    title: String,
    pay_per_hour: Decimal,
    pub(crate) time_in_events: Vec<TimeEvent>,
    pub(crate) time_out_events: Vec<TimeEvent>,
}

impl EmployeeRecord {
    /// Returns the employee's first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the employee's family name.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Returns the employee's job title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the hourly pay rate.
    pub fn pay_per_hour(&self) -> Decimal {
        self.pay_per_hour
    }

    /// Returns the recorded time-in events in recording order.
    pub fn time_in_events(&self) -> &[TimeEvent] {
        &self.time_in_events
    }

    /// Returns the recorded time-out events in recording order.
    pub fn time_out_events(&self) -> &[TimeEvent] {
        &self.time_out_events
    }

    /// Returns `"<first name> <family name>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.family_name)
    }

    /// Returns each date with a time-in event once, in order of first
    /// appearance.
    ///
    /// Dates that only have time-out events are not included.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{EmployeeRow, create_employee_record};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = create_employee_record(EmployeeRow::new("John", "Doe", "Manager", Decimal::from(25)));
    /// employee.create_time_in_event("2024-07-15 0900").unwrap();
    /// employee.create_time_in_event("2024-07-14 0900").unwrap();
    /// employee.create_time_in_event("2024-07-15 1300").unwrap();
    ///
    /// assert_eq!(
    ///     employee.distinct_dates(),
    ///     vec![
    ///         NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
    ///         NaiveDate::from_ymd_opt(2024, 7, 14).unwrap(),
    ///     ]
    /// );
    /// ```
    pub fn distinct_dates(&self) -> Vec<NaiveDate> {
        let mut seen = HashSet::new();
        self.time_in_events
            .iter()
            .map(|event| event.date)
            .filter(|date| seen.insert(*date))
            .collect()
    }
}

/// Creates an employee record from its positional fields.
///
/// Fields are assigned in the fixed order first name, family name, title,
/// pay per hour. Both event sequences start empty.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::{EmployeeRow, create_employee_record};
/// use rust_decimal::Decimal;
///
/// let employee = create_employee_record(EmployeeRow::new("John", "Doe", "Manager", Decimal::from(25)));
/// assert_eq!(employee.first_name(), "John");
/// assert_eq!(employee.pay_per_hour(), Decimal::from(25));
/// assert!(employee.time_in_events().is_empty());
/// ```
pub fn create_employee_record(row: EmployeeRow) -> EmployeeRecord {
    let EmployeeRow(first_name, family_name, title, pay_per_hour) = row;
    EmployeeRecord {
        first_name,
        family_name,
        title,
        pay_per_hour,
        time_in_events: Vec::new(),
        time_out_events: Vec::new(),
    }
}

/// Creates one employee record per row, preserving row order.
pub fn create_employee_records<I>(rows: I) -> Vec<EmployeeRecord>
where
    I: IntoIterator<Item = EmployeeRow>,
{
    rows.into_iter().map(create_employee_record).collect()
}
