pub mod init;
pub mod report;
pub mod sum;

use crate::libs::record::DailyRecord;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Reconcile a timesheet and display the daily report")]
    Report(report::ReportArgs),
    #[command(about = "Get period totals for a timesheet")]
    Sum(sum::SumArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
        }
    }
}

/// Builds the human-readable date range label for report headers.
pub(crate) fn range_label(records: &[DailyRecord], from: Option<NaiveDate>, to: Option<NaiveDate>) -> String {
    let first = from.or_else(|| records.first().map(|r| r.date));
    let last = to.or_else(|| records.last().map(|r| r.date));

    match (first, last) {
        (Some(first), Some(last)) if first == last => first.format("%B %-d, %Y").to_string(),
        (Some(first), Some(last)) => format!("{} to {}", first.format("%B %-d, %Y"), last.format("%B %-d, %Y")),
        _ => "the requested range".to_string(),
    }
}
