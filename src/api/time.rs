//! Parsing and formatting for the feed's timestamp strings

use chrono::{NaiveDateTime, NaiveTime, Timelike};

use crate::config::ClockFormat;

/// Parse a feed timestamp like "2024-01-01 08:00:00".
///
/// Some station installs emit the ISO "T" separator instead, so that is
/// tried as a fallback. Returns `None` for anything else; the caller
/// decides whether to skip the record.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Format a wall-clock time according to the configured clock format.
pub fn format_clock(time: NaiveTime, clock_format: ClockFormat) -> String {
    let (hour, minute) = (time.hour(), time.minute());
    match clock_format {
        ClockFormat::Hour24 => format!("{:02}:{:02}", hour, minute),
        ClockFormat::Hour12 => {
            let (h12, ampm) = if hour == 0 {
                (12, "am")
            } else if hour < 12 {
                (hour, "am")
            } else if hour == 12 {
                (12, "pm")
            } else {
                (hour - 12, "pm")
            };
            format!("{}:{:02}{}", h12, minute, ampm)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn parses_space_separated_timestamps() {
        let dt = parse_timestamp("2024-01-01 08:30:00").unwrap();
        assert_eq!(dt.to_string(), "2024-01-01 08:30:00");
    }

    #[test]
    fn parses_iso_t_separator_as_fallback() {
        let dt = parse_timestamp("2024-01-01T08:30:00").unwrap();
        assert_eq!(dt.to_string(), "2024-01-01 08:30:00");
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert_eq!(parse_timestamp("next tuesday"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test_case(0, 5, "00:05", "12:05am"; "midnight")]
    #[test_case(8, 0, "08:00", "8:00am"; "morning")]
    #[test_case(12, 30, "12:30", "12:30pm"; "noon")]
    #[test_case(23, 59, "23:59", "11:59pm"; "late evening")]
    fn formats_both_clock_styles(hour: u32, minute: u32, h24: &str, h12: &str) {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        assert_eq!(format_clock(time, ClockFormat::Hour24), h24);
        assert_eq!(format_clock(time, ClockFormat::Hour12), h12);
    }
}
