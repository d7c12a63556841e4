#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,
    ConfigParseError,
    ConfigNotFoundUsingDefaults,
    ConfigScheduleHeader,

    // === PROMPTS ===
    PromptSelectCategories,
    PromptWindowStart(String), // category label
    PromptWindowEnd(String),   // category label
    InvalidTimeInput(String),  // raw input

    // === REPORT MESSAGES ===
    ReportHeader(String), // date range
    TotalsHeader(String), // date range
    NoRecordsFound,

    // === TIMESHEET MESSAGES ===
    TimesheetReadFailed(String, String),  // path, cause
    TimesheetParseFailed(String, String), // path, cause
    TimesheetLoaded(usize),               // record count
}
