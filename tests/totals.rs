#[cfg(test)]
mod tests {
    use dtr::libs::clock::Punch;
    use dtr::libs::record::DailyRecord;
    use dtr::libs::reconcile::Summarize;
    use dtr::libs::schedule::{Category, ScheduleConfig, WindowConfig};
    use dtr::libs::totals::{aggregate, Aggregate};
    use chrono::{Duration, NaiveDate};

    fn schedule() -> ScheduleConfig {
        ScheduleConfig {
            morning: Some(WindowConfig {
                start: "08:00:00 AM".to_string(),
                end: "12:00:00 PM".to_string(),
            }),
            afternoon: Some(WindowConfig {
                start: "01:00:00 PM".to_string(),
                end: "05:00:00 PM".to_string(),
            }),
            honorarium: None,
            service_credit: None,
            overtime: None,
        }
    }

    fn record(day: u32, time_in: &str, break_out: &str, break_in: &str, time_out: &str) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            time_in: Punch::parse(Some(time_in)),
            break_out: Punch::parse(Some(break_out)),
            break_in: Punch::parse(Some(break_in)),
            time_out: Punch::parse(Some(time_out)),
            schedule: schedule(),
        }
    }

    #[test]
    fn test_two_row_scenario() {
        // Row A arrives early (clamped to the official start), row B is
        // thirty minutes tardy.
        let records = vec![
            record(2, "07:45:00 AM", "12:00:00 PM", "01:00:00 PM", "05:00:00 PM"),
            record(3, "08:30:00 AM", "12:00:00 PM", "01:00:00 PM", "05:00:00 PM"),
        ];
        let summaries = records.summarize();

        assert_eq!(summaries[0].rendered(Category::Morning), "04:00:00");
        assert_eq!(summaries[1].rendered(Category::Morning), "03:30:00");

        let totals = summaries.totals();
        assert_eq!(totals.rendered(Category::Morning), "07:30:00");
        assert_eq!(totals.shortfall(Category::Morning), "00:30:00");
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let records = vec![
            record(2, "08:00:00 AM", "12:00:00 PM", "01:00:00 PM", "05:00:00 PM"),
            record(3, "08:15:00 AM", "12:00:00 PM", "01:00:00 PM", "04:45:00 PM"),
        ];
        let summaries = records.summarize();
        assert_eq!(aggregate(&summaries), aggregate(&summaries));
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let records = vec![
            record(2, "08:00:00 AM", "12:00:00 PM", "01:00:00 PM", "05:00:00 PM"),
            record(3, "08:15:00 AM", "12:00:00 PM", "01:00:00 PM", "04:45:00 PM"),
            record(4, "09:00:00 AM", "12:00:00 PM", "01:00:00 PM", "05:00:00 PM"),
        ];
        let forward = records.summarize().totals();

        let mut reversed = records;
        reversed.reverse();
        let backward = reversed.summarize().totals();

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_official_day_totals_combine_morning_and_afternoon() {
        let records = vec![record(2, "08:30:00 AM", "12:00:00 PM", "01:00:00 PM", "04:30:00 PM")];
        let totals = records.summarize().totals();

        assert_eq!(totals.official_day.rendered, Duration::hours(7));
        assert_eq!(totals.official_day.shortfall, Duration::hours(1));
    }

    #[test]
    fn test_totals_past_twenty_four_hours_do_not_roll_over() {
        // A full week of complete days: 5 x 8h = 40h, displayed as 40:00:00.
        let records: Vec<DailyRecord> = (2..7).map(|day| record(day, "08:00:00 AM", "12:00:00 PM", "01:00:00 PM", "05:00:00 PM")).collect();
        let totals = records.summarize().totals();

        assert_eq!(totals.official_day.rendered, Duration::hours(40));
        assert_eq!(dtr::libs::formatter::format_duration(&totals.official_day.rendered), "40:00:00");
    }

    #[test]
    fn test_absent_rows_contribute_zero_rendered_and_full_window_shortfall() {
        let absent = DailyRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            time_in: Punch::Missing,
            break_out: Punch::Missing,
            break_in: Punch::Missing,
            time_out: Punch::Missing,
            schedule: schedule(),
        };
        let present = record(3, "08:00:00 AM", "12:00:00 PM", "01:00:00 PM", "05:00:00 PM");

        let totals = vec![absent, present].summarize().totals();
        assert_eq!(totals.category(Category::Morning).rendered, Duration::hours(4));
        assert_eq!(totals.category(Category::Morning).shortfall, Duration::hours(4));
        assert_eq!(totals.official_day.rendered, Duration::hours(8));
        assert_eq!(totals.official_day.shortfall, Duration::hours(8));
    }
}
