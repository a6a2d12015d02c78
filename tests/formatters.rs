#[cfg(test)]
mod tests {
    use clockin::libs::duration::WorkDuration;
    use clockin::libs::formatter::{format_duration, format_optional};

    fn d(hours: u64, minutes: u64, seconds: u64) -> WorkDuration {
        WorkDuration { hours, minutes, seconds }
    }

    #[test]
    fn test_format_seconds_only() {
        assert_eq!(format_duration(&d(0, 0, 5)), "5s");
        assert_eq!(format_duration(&d(0, 0, 0)), "0s");
    }

    #[test]
    fn test_format_minutes_and_seconds() {
        assert_eq!(format_duration(&d(0, 3, 5)), "3m 5s");
        assert_eq!(format_duration(&d(0, 59, 0)), "59m 0s");
    }

    #[test]
    fn test_format_keeps_zero_minutes_after_hours() {
        assert_eq!(format_duration(&d(2, 0, 5)), "2h 0m 5s");
        assert_eq!(format_duration(&d(8, 30, 15)), "8h 30m 15s");
    }

    #[test]
    fn test_display_matches_format() {
        let worked = WorkDuration::from_seconds(3 * 3600 + 7);
        assert_eq!(worked.to_string(), "3h 0m 7s");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(None), "-");
        assert_eq!(format_optional(Some(&d(0, 1, 1))), "1m 1s");
    }
}
