#[cfg(test)]
mod tests {
    use dtr::libs::formatter::{format_duration, parse_duration};
    use chrono::Duration;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "00:00:00");
    }

    #[test]
    fn test_format_duration_padding() {
        assert_eq!(format_duration(&Duration::seconds(5)), "00:00:05");
        assert_eq!(format_duration(&Duration::minutes(7)), "00:07:00");
        assert_eq!(format_duration(&(Duration::hours(4) + Duration::minutes(3) + Duration::seconds(2))), "04:03:02");
    }

    #[test]
    fn test_format_duration_typical_windows() {
        assert_eq!(format_duration(&Duration::hours(4)), "04:00:00");
        assert_eq!(format_duration(&(Duration::hours(3) + Duration::minutes(30))), "03:30:00");
        assert_eq!(format_duration(&(Duration::hours(7) + Duration::minutes(30))), "07:30:00");
    }

    #[test]
    fn test_format_duration_hours_widen_past_two_digits() {
        // Long period totals are never rolled into days.
        assert_eq!(format_duration(&Duration::hours(100)), "100:00:00");
        assert_eq!(format_duration(&(Duration::hours(176) + Duration::minutes(45))), "176:45:00");
    }

    #[test]
    fn test_format_duration_negative_clamped_to_zero() {
        assert_eq!(format_duration(&Duration::seconds(-30)), "00:00:00");
        assert_eq!(format_duration(&Duration::hours(-5)), "00:00:00");
    }

    #[test]
    fn test_parse_duration_inverse_of_format() {
        // Whole-second durations under 100 hours round-trip exactly.
        let samples = [
            Duration::zero(),
            Duration::seconds(1),
            Duration::minutes(59) + Duration::seconds(59),
            Duration::hours(4),
            Duration::hours(7) + Duration::minutes(30),
            Duration::hours(99) + Duration::minutes(59) + Duration::seconds(59),
        ];
        for duration in samples {
            assert_eq!(parse_duration(&format_duration(&duration)), duration);
        }
    }

    #[test]
    fn test_parse_duration_round_trip_upper_bound() {
        // 359_999_000 ms is one second short of 100 hours.
        let duration = Duration::milliseconds(359_999_000);
        assert_eq!(parse_duration(&format_duration(&duration)), duration);
    }

    #[test]
    fn test_parse_duration_failure_contributes_zero() {
        assert_eq!(parse_duration("NaN:NaN:NaN"), Duration::zero());
        assert_eq!(parse_duration(""), Duration::zero());
        assert_eq!(parse_duration("04:00"), Duration::zero());
        assert_eq!(parse_duration("a:b:c"), Duration::zero());
    }

    #[test]
    fn test_parse_duration_rejects_extra_fields() {
        assert_eq!(parse_duration("01:02:03:04"), Duration::zero());
    }
}
