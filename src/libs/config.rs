//! Configuration management for the dtr application.
//!
//! The configuration holds one thing: the official schedule windows each
//! pay category is reconciled against. It is stored as pretty-printed JSON
//! in the platform application-data directory and edited through an
//! interactive wizard (`dtr init`) that validates every boundary before it
//! is accepted.
//!
//! Window boundaries are kept in the same `hh:mm:ss A` form the backend
//! uses, so a config file and a timesheet row override read identically.

use crate::libs::clock::TimeOfDay;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::schedule::{Category, ScheduleConfig, WindowConfig};
use crate::{msg_debug, msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::File;

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Top-level application configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<ScheduleConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when the
    /// file does not exist yet.
    pub fn read() -> Result<Self> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            msg_debug!(Message::ConfigFileNotFound);
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&config_file_path)?;
        serde_json::from_str(&contents).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The schedule to reconcile against, defaulting when unconfigured.
    pub fn schedule(&self) -> ScheduleConfig {
        self.schedule.clone().unwrap_or_default()
    }

    /// Runs the interactive schedule setup wizard.
    ///
    /// Presents the five pay categories, pre-selecting the ones already
    /// configured, and prompts for each selected category's window
    /// boundaries. Inputs are validated as `hh:mm:ss A` times before they
    /// are accepted.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let mut schedule = config.schedule();

        msg_print!(Message::ConfigScheduleHeader);

        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        let preselected: Vec<bool> = Category::ALL.iter().map(|c| !c.is_supplemental()).collect();

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectCategories.to_string())
            .items(&labels)
            .defaults(&preselected)
            .interact()?;

        for &index in &selected {
            let category = Category::ALL[index];
            let window = prompt_window(category, current_window(&schedule, category))?;
            set_window(&mut schedule, category, window);
        }

        config.schedule = Some(schedule);
        Ok(config)
    }
}

fn prompt_window(category: Category, current: Option<WindowConfig>) -> Result<WindowConfig> {
    let defaults = current.unwrap_or_else(|| WindowConfig {
        start: "08:00:00 AM".to_string(),
        end: "05:00:00 PM".to_string(),
    });

    let start = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptWindowStart(category.label().to_string()).to_string())
        .default(defaults.start)
        .validate_with(validate_time)
        .interact_text()?;

    let end = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptWindowEnd(category.label().to_string()).to_string())
        .default(defaults.end)
        .validate_with(validate_time)
        .interact_text()?;

    Ok(WindowConfig { start, end })
}

fn validate_time(input: &String) -> Result<(), String> {
    TimeOfDay::parse(input).map(|_| ()).map_err(|_| Message::InvalidTimeInput(input.clone()).to_string())
}

fn current_window(schedule: &ScheduleConfig, category: Category) -> Option<WindowConfig> {
    match category {
        Category::Morning => schedule.morning.clone(),
        Category::Afternoon => schedule.afternoon.clone(),
        Category::Honorarium => schedule.honorarium.clone(),
        Category::ServiceCredit => schedule.service_credit.clone(),
        Category::Overtime => schedule.overtime.clone(),
    }
}

fn set_window(schedule: &mut ScheduleConfig, category: Category, window: WindowConfig) {
    match category {
        Category::Morning => schedule.morning = Some(window),
        Category::Afternoon => schedule.afternoon = Some(window),
        Category::Honorarium => schedule.honorarium = Some(window),
        Category::ServiceCredit => schedule.service_credit = Some(window),
        Category::Overtime => schedule.overtime = Some(window),
    }
}
