//! Per-category reconciliation of daily records.
//!
//! This is the core payroll computation: for each pay category of a daily
//! record, intersect the employee's actual punch interval with the
//! category's official window and report the rendered time (credit earned
//! inside the window) and the shortfall (how far short of the full window
//! the employee fell).
//!
//! ## Rules
//!
//! - The maximum window is always the *official* span, never the actual
//!   one — tardiness is measured against policy, not against the
//!   employee's own clock-in.
//! - A category with no applicable window contributes nothing at all.
//! - A row whose consulted punches cannot prove attendance renders zero
//!   and owes the whole window. The fallback direction is deliberate: it
//!   goes to the full window, never to zero.
//!
//! The computation is pure and per-row independent; nothing here errors
//! and nothing is cached.

use crate::libs::clock::Punch;
use crate::libs::formatter::format_duration;
use crate::libs::record::DailyRecord;
use crate::libs::schedule::Category;
use crate::libs::window::clamp;
use chrono::{Duration, NaiveDate};

/// The outcome of reconciling one category of one daily record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryResult {
    /// Time actually worked inside the official window.
    pub rendered: Duration,
    /// The full official span — the target.
    pub max_window: Duration,
    /// `max_window - rendered`, floored at zero.
    pub shortfall: Duration,
}

impl CategoryResult {
    /// The result of a category that does not apply to this record.
    pub fn zero() -> Self {
        Self {
            rendered: Duration::zero(),
            max_window: Duration::zero(),
            shortfall: Duration::zero(),
        }
    }
}

/// Reconciles one category of one daily record.
pub fn reconcile(record: &DailyRecord, category: Category) -> CategoryResult {
    let Some(window) = record.schedule.window(category) else {
        return CategoryResult::zero();
    };
    let max_window = window.span();

    let (start_punch, end_punch) = consulted_punches(record, category);
    let (Some(actual_start), Some(actual_end)) = (start_punch.recorded(), end_punch.recorded()) else {
        // Unprovable attendance owes the whole window.
        return CategoryResult {
            rendered: Duration::zero(),
            max_window,
            shortfall: max_window,
        };
    };

    let (clamped_start, clamped_end) = clamp(actual_start, actual_end, &window, category.policy());
    let rendered = clamped_end.since(&clamped_start);
    let shortfall = (max_window - rendered).max(Duration::zero());

    CategoryResult {
        rendered,
        max_window,
        shortfall,
    }
}

// The punch pair each category's clamp consults: the morning session runs
// from arrival to the lunch break, the afternoon session from the break's
// end to departure, and supplemental sessions span the whole day's punches.
fn consulted_punches(record: &DailyRecord, category: Category) -> (Punch, Punch) {
    match category {
        Category::Morning => (record.time_in, record.break_out),
        Category::Afternoon => (record.break_in, record.time_out),
        Category::Honorarium | Category::ServiceCredit | Category::Overtime => (record.time_in, record.time_out),
    }
}

/// All category results for one daily record.
#[derive(Debug, Clone)]
pub struct RecordSummary {
    pub date: NaiveDate,
    results: [CategoryResult; Category::ALL.len()],
}

impl RecordSummary {
    /// Reconciles every category of a record.
    pub fn of(record: &DailyRecord) -> Self {
        let mut results = [CategoryResult::zero(); Category::ALL.len()];
        for category in Category::ALL {
            results[category.index()] = reconcile(record, category);
        }
        Self { date: record.date, results }
    }

    pub fn result(&self, category: Category) -> &CategoryResult {
        &self.results[category.index()]
    }

    /// The combined Morning+Afternoon pair for this row: official-day
    /// rendered time and tardiness.
    pub fn official_day(&self) -> (Duration, Duration) {
        let am = self.result(Category::Morning);
        let pm = self.result(Category::Afternoon);
        (am.rendered + pm.rendered, am.shortfall + pm.shortfall)
    }

    /// Formatted rendered time for a category.
    pub fn rendered(&self, category: Category) -> String {
        format_duration(&self.result(category).rendered)
    }

    /// Formatted shortfall for a category.
    pub fn shortfall(&self, category: Category) -> String {
        format_duration(&self.result(category).shortfall)
    }
}

/// Chainable reconciliation over record collections.
pub trait Summarize {
    fn summarize(&self) -> Vec<RecordSummary>;
}

impl Summarize for Vec<DailyRecord> {
    fn summarize(&self) -> Vec<RecordSummary> {
        self.iter().map(RecordSummary::of).collect()
    }
}
