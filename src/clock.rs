use crate::{RallyError, Result};
use chrono::{NaiveTime, Timelike};

const CLOCK_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Parses a clock reading written as `HH:MM:SS`, or `HH:MM` for a reading on the minute. Leap seconds (`23:59:60`)
/// are rejected.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();

    CLOCK_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(s, format).ok())
        // chrono represents a leap second as a nanosecond count past one second
        .filter(|time| time.nanosecond() < 1_000_000_000)
        .ok_or_else(|| RallyError::InvalidClockTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_clock_time;
    use crate::RallyError;
    use chrono::NaiveTime;

    #[test]
    fn parse_with_seconds() {
        let parsed = parse_clock_time("10:02:30").unwrap();
        assert_eq!(parsed, NaiveTime::from_hms_opt(10, 2, 30).unwrap());
    }

    #[test]
    fn parse_without_seconds() {
        let parsed = parse_clock_time(" 09:05 ").unwrap();
        assert_eq!(parsed, NaiveTime::from_hms_opt(9, 5, 0).unwrap());
    }

    #[test]
    fn parse_invalid() {
        for input in &["", "abc", "25:00:00", "10:60:00", "10:02:30 pm", "23:59:60", "10:00:60"] {
            assert!(
                matches!(parse_clock_time(input), Err(RallyError::InvalidClockTime(_))),
                "{}",
                input
            );
        }
    }
}
