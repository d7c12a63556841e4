//! Daily punch records and timesheet loading.
//!
//! A timesheet is the JSON export of a backend attendance query: one entry
//! per employee per day, carrying the raw punch strings and, optionally, a
//! per-row schedule override for rows that belong to a different employee
//! class. Records are resolved once into typed [`DailyRecord`] values and
//! never mutated afterwards.

use crate::libs::clock::Punch;
use crate::libs::messages::Message;
use crate::libs::schedule::ScheduleConfig;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One exported row, exactly as the backend serializes it.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RawRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub time_in: Option<String>,
    #[serde(default)]
    pub break_out: Option<String>,
    #[serde(default)]
    pub break_in: Option<String>,
    #[serde(default)]
    pub time_out: Option<String>,
    /// Official-window overrides for this row's employee class.
    #[serde(default)]
    pub schedule: Option<ScheduleConfig>,
}

/// A resolved daily record: typed punches plus the schedule that applies
/// to this row.
#[derive(Debug, Clone)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub time_in: Punch,
    pub break_out: Punch,
    pub break_in: Punch,
    pub time_out: Punch,
    pub schedule: ScheduleConfig,
}

impl DailyRecord {
    /// Resolves a raw row against the configured base schedule.
    pub fn resolve(raw: &RawRecord, base: &ScheduleConfig) -> Self {
        Self {
            date: raw.date,
            time_in: Punch::parse(raw.time_in.as_deref()),
            break_out: Punch::parse(raw.break_out.as_deref()),
            break_in: Punch::parse(raw.break_in.as_deref()),
            time_out: Punch::parse(raw.time_out.as_deref()),
            schedule: base.merged(raw.schedule.as_ref()),
        }
    }
}

/// An ordered collection of daily records for one employee.
#[derive(Debug, Clone)]
pub struct Timesheet {
    pub records: Vec<DailyRecord>,
}

impl Timesheet {
    /// Loads a timesheet export and resolves every row against the base
    /// schedule. Records come out sorted by date.
    pub fn load(path: &Path, base: &ScheduleConfig) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| msg_error_anyhow!(Message::TimesheetReadFailed(path.display().to_string(), e.to_string())))?;
        let raw: Vec<RawRecord> =
            serde_json::from_str(&contents).map_err(|e| msg_error_anyhow!(Message::TimesheetParseFailed(path.display().to_string(), e.to_string())))?;

        let mut records: Vec<DailyRecord> = raw.iter().map(|r| DailyRecord::resolve(r, base)).collect();
        records.sort_by_key(|r| r.date);

        Ok(Self { records })
    }

    /// Keeps only records inside the inclusive date range.
    pub fn range(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.records.retain(|r| from.map_or(true, |f| r.date >= f) && to.map_or(true, |t| r.date <= t));
        self
    }
}
