//! Display implementation for application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent and the rest of the code works with typed [`Message`]
//! values instead of string literals.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigNotFoundUsingDefaults => "No configuration found, using the default schedule. Run 'dtr init' to configure.".to_string(),
            Message::ConfigScheduleHeader => "Official schedule windows (hh:mm:ss AM/PM)".to_string(),

            // === PROMPTS ===
            Message::PromptSelectCategories => "Select the pay categories to configure".to_string(),
            Message::PromptWindowStart(label) => format!("{} window start", label),
            Message::PromptWindowEnd(label) => format!("{} window end", label),
            Message::InvalidTimeInput(raw) => format!("'{}' is not a valid hh:mm:ss AM/PM time", raw),

            // === REPORT MESSAGES ===
            Message::ReportHeader(range) => format!("Daily time record for {}", range),
            Message::TotalsHeader(range) => format!("Period totals for {}", range),
            Message::NoRecordsFound => "No records found for the requested range".to_string(),

            // === TIMESHEET MESSAGES ===
            Message::TimesheetReadFailed(path, cause) => format!("Failed to read timesheet '{}': {}", path, cause),
            Message::TimesheetParseFailed(path, cause) => format!("Failed to parse timesheet '{}': {}", path, cause),
            Message::TimesheetLoaded(count) => format!("Loaded {} timesheet record(s)", count),
        };
        write!(f, "{}", text)
    }
}
