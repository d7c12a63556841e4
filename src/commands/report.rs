//! Daily reconciliation report command.
//!
//! Loads a timesheet export, reconciles every record against the schedule
//! and prints the per-day table: rendered time per category, the combined
//! official day and its tardiness.

use crate::{
    commands::range_label,
    libs::{config::Config, messages::Message, reconcile::Summarize, record::Timesheet, view::View},
    msg_debug, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Path to the timesheet export (JSON)
    file: PathBuf,
    #[arg(long, help = "Start date (YYYY-MM-DD)")]
    from: Option<NaiveDate>,
    #[arg(long, help = "End date (YYYY-MM-DD)")]
    to: Option<NaiveDate>,
}

pub fn cmd(report_args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    if config.schedule.is_none() {
        msg_warning!(Message::ConfigNotFoundUsingDefaults);
    }
    let schedule = config.schedule();

    let timesheet = Timesheet::load(&report_args.file, &schedule)?.range(report_args.from, report_args.to);
    msg_debug!(Message::TimesheetLoaded(timesheet.records.len()));
    if timesheet.records.is_empty() {
        msg_print!(Message::NoRecordsFound);
        return Ok(());
    }

    msg_print!(
        Message::ReportHeader(range_label(&timesheet.records, report_args.from, report_args.to)),
        true
    );
    let summaries = timesheet.records.summarize();
    View::report(&summaries)?;

    Ok(())
}
