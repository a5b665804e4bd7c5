//! Timestamp parsing.
//!
//! Clock events arrive as `"YYYY-MM-DD HHMM"` strings: a calendar date, one
//! space, then a 3 or 4 digit hour-minute numeral. The numeral is kept as the
//! integer its digits spell (`"0900"` becomes `900`).

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Format of the date portion of a timestamp and of lookup dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The two halves of a parsed timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTimestamp {
    /// The calendar day.
    pub date: NaiveDate,
    /// The `HHMM` numeral with leading zeros dropped.
    pub hour: u32,
}

/// Parses a `"YYYY-MM-DD HHMM"` timestamp.
///
/// # Errors
///
/// Returns [`EngineError::MalformedTimestamp`] when the input is not a date
/// and a 3 or 4 digit numeral separated by exactly one space, or when the date
/// is not a real calendar day. The numeral itself is not range checked, so
/// `"2024-07-14 2575"` parses with `hour == 2575`.
///
/// # Examples
///
/// ```
/// use payroll_engine::timestamp::parse_timestamp;
/// use chrono::NaiveDate;
///
/// let parsed = parse_timestamp("2024-07-14 0900").unwrap();
/// assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 7, 14).unwrap());
/// assert_eq!(parsed.hour, 900);
/// ```
pub fn parse_timestamp(input: &str) -> EngineResult<ParsedTimestamp> {
    let malformed = |reason: &str| EngineError::MalformedTimestamp {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (date_part, hour_part) = input
        .split_once(' ')
        .ok_or_else(|| malformed("expected a space between date and hour"))?;

    if hour_part.contains(' ') {
        return Err(malformed("expected exactly one space"));
    }

    if !(3..=4).contains(&hour_part.len()) {
        return Err(malformed("hour must have 3 or 4 digits"));
    }

    if !hour_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed("hour must contain only digits"));
    }

    let date = parse_calendar_day(date_part)
        .ok_or_else(|| malformed("date must be a YYYY-MM-DD calendar day"))?;

    let hour = hour_part
        .parse::<u32>()
        .map_err(|_| malformed("hour must contain only digits"))?;

    Ok(ParsedTimestamp { date, hour })
}

/// Parses a `"YYYY-MM-DD"` lookup date.
///
/// # Errors
///
/// Returns [`EngineError::MalformedDate`] if the input is not a calendar day
/// in that format.
pub fn parse_date(input: &str) -> EngineResult<NaiveDate> {
    parse_calendar_day(input).ok_or_else(|| EngineError::MalformedDate {
        input: input.to_string(),
    })
}

/// Parses exactly `YYYY-MM-DD`: zero padded, no sign, real calendar day.
fn parse_calendar_day(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn assert_malformed(input: &str) {
        match parse_timestamp(input) {
            Err(EngineError::MalformedTimestamp { input: got, .. }) => assert_eq!(got, input),
            other => panic!("Expected MalformedTimestamp for {:?}, got {:?}", input, other),
        }
    }

    #[test]
    fn test_parse_morning_drops_leading_zero() {
        let parsed = parse_timestamp("2024-07-14 0900").unwrap();
        assert_eq!(parsed.date, make_date("2024-07-14"));
        assert_eq!(parsed.hour, 900);
    }

    #[test]
    fn test_parse_afternoon() {
        let parsed = parse_timestamp("2024-07-14 1700").unwrap();
        assert_eq!(parsed.hour, 1700);
    }

    #[test]
    fn test_parse_three_digit_hour() {
        let parsed = parse_timestamp("2024-07-15 830").unwrap();
        assert_eq!(parsed.date, make_date("2024-07-15"));
        assert_eq!(parsed.hour, 830);
    }

    #[test]
    fn test_parse_midnight() {
        let parsed = parse_timestamp("2024-07-15 0000").unwrap();
        assert_eq!(parsed.hour, 0);
    }

    #[test]
    fn test_missing_space_is_malformed() {
        assert_malformed("2024-07-140900");
        assert_malformed("2024-07-14");
    }

    #[test]
    fn test_extra_space_is_malformed() {
        assert_malformed("2024-07-14  0900");
        assert_malformed("2024-07-14 0900 ");
    }

    #[test]
    fn test_non_numeric_hour_is_malformed() {
        assert_malformed("2024-07-14 09a0");
        assert_malformed("2024-07-14 +900");
    }

    #[test]
    fn test_wrong_digit_count_is_malformed() {
        assert_malformed("2024-07-14 90");
        assert_malformed("2024-07-14 09000");
        assert_malformed("2024-07-14 ");
    }

    #[test]
    fn test_bad_date_is_malformed() {
        assert_malformed("14-07-2024 0900");
        assert_malformed("2024-02-30 0900");
        assert_malformed(" 0900");
        assert_malformed("2024-7-4 0900");
        assert_malformed("2024-07-4 0900");
        assert_malformed("+2024-07-14 0900");
        assert_malformed("02024-07-14 0900");
        assert_malformed("2024/07/14 0900");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-07-14").unwrap(), make_date("2024-07-14"));
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        match parse_date("07/14/2024") {
            Err(EngineError::MalformedDate { input }) => assert_eq!(input, "07/14/2024"),
            other => panic!("Expected MalformedDate, got {:?}", other),
        }
        for input in ["2024-7-4", "2024-07-4", "+2024-07-14", "2024-07-14 ", "2024-13-01"] {
            assert!(
                matches!(parse_date(input), Err(EngineError::MalformedDate { .. })),
                "Expected MalformedDate for {:?}",
                input
            );
        }
    }

    proptest! {
        #[test]
        fn prop_four_digit_numerals_parse_to_their_value(
            day in 1u32..=28,
            hour in 0u32..=2359,
        ) {
            let input = format!("2024-07-{:02} {:04}", day, hour);
            let parsed = parse_timestamp(&input).unwrap();
            prop_assert_eq!(parsed.hour, hour);
            prop_assert_eq!(parsed.date, NaiveDate::from_ymd_opt(2024, 7, day).unwrap());
        }
    }
}
