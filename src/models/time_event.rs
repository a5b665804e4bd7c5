//! Time event model.
//!
//! A time event is a single recorded clock boundary (in or out) for an
//! employee on a calendar day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which clock boundary a [`TimeEvent`] marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// The employee clocked in.
    TimeIn,
    /// The employee clocked out.
    TimeOut,
}

/// A recorded clock-in or clock-out.
///
/// `hour` holds the literal `HHMM` digits of the timestamp as an integer, so
/// `"0900"` is stored as `900` and `"1730"` as `1730`. It is not a count of
/// minutes since midnight.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EventType, TimeEvent};
/// use chrono::NaiveDate;
///
/// let event = TimeEvent {
///     event_type: EventType::TimeIn,
///     date: NaiveDate::from_ymd_opt(2024, 7, 14).unwrap(),
///     hour: 900,
/// };
/// assert!(event.is_on(NaiveDate::from_ymd_opt(2024, 7, 14).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEvent {
    /// The boundary this event marks.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// The calendar day the event belongs to.
    pub date: NaiveDate,
    /// The `HHMM` numeral of the event.
    pub hour: u32,
}

impl TimeEvent {
    /// Returns true if the event was recorded on `date`.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
