#[cfg(test)]
mod tests {
    use dtr::libs::clock::{Punch, TimeOfDay};
    use chrono::Duration;

    #[test]
    fn test_parse_valid_morning_time() {
        let time = TimeOfDay::parse("08:00:00 AM").unwrap();
        assert_eq!(time, TimeOfDay::from_hms(8, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_valid_afternoon_time() {
        let time = TimeOfDay::parse("04:30:00 PM").unwrap();
        assert_eq!(time, TimeOfDay::from_hms(16, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_noon_and_midnight() {
        let noon = TimeOfDay::parse("12:00:00 PM").unwrap();
        assert_eq!(noon, TimeOfDay::from_hms(12, 0, 0).unwrap());

        let midnight = TimeOfDay::parse("12:00:00 AM").unwrap();
        assert_eq!(midnight, TimeOfDay::midnight());
    }

    #[test]
    fn test_parse_rejects_sentinel_hour() {
        // Backends mark unrecorded punches with an out-of-range hour.
        assert!(TimeOfDay::parse("132:00:00 AM").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_strings() {
        assert!(TimeOfDay::parse("").is_err());
        assert!(TimeOfDay::parse("not a time").is_err());
        assert!(TimeOfDay::parse("08:00:00").is_err());
        assert!(TimeOfDay::parse("25:00:00 PM").is_err());
    }

    #[test]
    fn test_ordering_follows_wall_clock() {
        let early = TimeOfDay::parse("07:45:00 AM").unwrap();
        let late = TimeOfDay::parse("05:00:00 PM").unwrap();
        assert!(early < late);
        assert!(TimeOfDay::midnight() < early);
    }

    #[test]
    fn test_subtraction_yields_duration() {
        let start = TimeOfDay::parse("08:00:00 AM").unwrap();
        let end = TimeOfDay::parse("12:00:00 PM").unwrap();
        assert_eq!(end.since(&start), Duration::hours(4));
    }

    #[test]
    fn test_punch_parse_recorded() {
        let punch = Punch::parse(Some("09:15:30 AM"));
        assert_eq!(punch.recorded(), TimeOfDay::from_hms(9, 15, 30));
    }

    #[test]
    fn test_punch_parse_sentinel_is_missing() {
        assert_eq!(Punch::parse(Some("132:00:00 AM")), Punch::Missing);
    }

    #[test]
    fn test_punch_parse_absent_field_is_missing() {
        assert_eq!(Punch::parse(None), Punch::Missing);
        assert_eq!(Punch::parse(Some("")), Punch::Missing);
        assert_eq!(Punch::parse(Some("garbage")), Punch::Missing);
    }
}
