//! Time event recording.
//!
//! Appends clock-in and clock-out events to an [`EmployeeRecord`]. Events are
//! kept in the order they are recorded; no chronological checks are made.

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{EmployeeRecord, EventType, TimeEvent};
use crate::timestamp::parse_timestamp;

impl EmployeeRecord {
    /// Records a clock-in from a `"YYYY-MM-DD HHMM"` timestamp.
    ///
    /// Returns the appended event. A malformed timestamp leaves the record
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{EmployeeRow, EventType, create_employee_record};
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = create_employee_record(EmployeeRow::new("John", "Doe", "Manager", Decimal::from(25)));
    /// let event = employee.create_time_in_event("2024-07-14 0900").unwrap();
    /// assert_eq!(event.event_type, EventType::TimeIn);
    /// assert_eq!(event.hour, 900);
    /// ```
    pub fn create_time_in_event(&mut self, timestamp: &str) -> EngineResult<&TimeEvent> {
        let event = build_event(EventType::TimeIn, timestamp)?;
        self.time_in_events.push(event);
        Ok(&self.time_in_events[self.time_in_events.len() - 1])
    }

    /// Records a clock-out from a `"YYYY-MM-DD HHMM"` timestamp.
    ///
    /// Returns the appended event. A malformed timestamp leaves the record
    /// unchanged.
    pub fn create_time_out_event(&mut self, timestamp: &str) -> EngineResult<&TimeEvent> {
        let event = build_event(EventType::TimeOut, timestamp)?;
        self.time_out_events.push(event);
        Ok(&self.time_out_events[self.time_out_events.len() - 1])
    }
}

fn build_event(event_type: EventType, timestamp: &str) -> EngineResult<TimeEvent> {
    let parsed = parse_timestamp(timestamp)?;
    debug!(
        event_type = ?event_type,
        date = %parsed.date,
        hour = parsed.hour,
        "Recording time event"
    );
    Ok(TimeEvent {
        event_type,
        date: parsed.date,
        hour: parsed.hour,
    })
}
