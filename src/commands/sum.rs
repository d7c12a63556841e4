//! Period totals command.
//!
//! Sums reconciled records over a date range and prints one rendered and
//! shortfall total per pay category, plus the combined official-day pair.

use crate::{
    commands::range_label,
    libs::{config::Config, messages::Message, reconcile::Summarize, record::Timesheet, totals::Aggregate, view::View},
    msg_print, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SumArgs {
    /// Path to the timesheet export (JSON)
    file: PathBuf,
    #[arg(long, help = "Start date (YYYY-MM-DD)")]
    from: Option<NaiveDate>,
    #[arg(long, help = "End date (YYYY-MM-DD)")]
    to: Option<NaiveDate>,
}

pub fn cmd(sum_args: SumArgs) -> Result<()> {
    let config = Config::read()?;
    if config.schedule.is_none() {
        msg_warning!(Message::ConfigNotFoundUsingDefaults);
    }
    let schedule = config.schedule();

    let timesheet = Timesheet::load(&sum_args.file, &schedule)?.range(sum_args.from, sum_args.to);
    if timesheet.records.is_empty() {
        msg_print!(Message::NoRecordsFound);
        return Ok(());
    }

    msg_print!(Message::TotalsHeader(range_label(&timesheet.records, sum_args.from, sum_args.to)), true);
    let totals = timesheet.records.summarize().totals();
    View::totals(&totals)?;

    Ok(())
}
