use crate::libs::formatter::format_duration;
use crate::libs::reconcile::RecordSummary;
use crate::libs::schedule::Category;
use crate::libs::totals::PeriodTotals;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the per-day reconciliation table.
    pub fn report(summaries: &[RecordSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "DATE",
            "MORNING",
            "AFTERNOON",
            "DAY",
            "TARDINESS",
            "HONORARIUM",
            "SERVICE CREDIT",
            "OVERTIME"
        ]);
        for summary in summaries {
            let (day, tardiness) = summary.official_day();
            table.add_row(row![
                summary.date.format("%Y-%m-%d"),
                summary.rendered(Category::Morning),
                summary.rendered(Category::Afternoon),
                format_duration(&day),
                format_duration(&tardiness),
                summary.rendered(Category::Honorarium),
                summary.rendered(Category::ServiceCredit),
                summary.rendered(Category::Overtime)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints the period totals table.
    pub fn totals(totals: &PeriodTotals) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CATEGORY", "RENDERED", "SHORTFALL"]);
        for category in Category::ALL {
            table.add_row(row![category.label(), totals.rendered(category), totals.shortfall(category)]);
        }
        table.add_row(row![
            "Official day",
            format_duration(&totals.official_day.rendered),
            format_duration(&totals.official_day.shortfall)
        ]);
        table.printstd();

        Ok(())
    }
}
