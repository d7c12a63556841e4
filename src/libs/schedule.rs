//! Pay categories and official schedule configuration.
//!
//! A daily record is reconciled independently against up to five pay
//! categories. The two core categories (morning, afternoon) make up the
//! official workday; the supplemental ones (honorarium, service credit,
//! overtime) only apply to employees whose schedule configures them.
//! Backends that have no window for a supplemental category send the
//! `00:00:00 AM` sentinel on both boundaries, which resolves here to
//! "not applicable".

use crate::libs::clock::TimeOfDay;
use crate::libs::window::{OfficialWindow, WindowPolicy};
use serde::{Deserialize, Serialize};

/// One independent pay-credit bucket of a daily record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Morning,
    Afternoon,
    Honorarium,
    ServiceCredit,
    Overtime,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Morning,
        Category::Afternoon,
        Category::Honorarium,
        Category::ServiceCredit,
        Category::Overtime,
    ];

    /// The clamp policy this category is reconciled under.
    pub fn policy(&self) -> WindowPolicy {
        match self {
            Category::Morning => WindowPolicy::Morning,
            Category::Afternoon => WindowPolicy::Afternoon,
            Category::Honorarium | Category::ServiceCredit | Category::Overtime => WindowPolicy::FullSpan,
        }
    }

    /// Whether this category is only applicable when explicitly scheduled.
    pub fn is_supplemental(&self) -> bool {
        matches!(self, Category::Honorarium | Category::ServiceCredit | Category::Overtime)
    }

    /// Display label used in tables and prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Morning => "Morning",
            Category::Afternoon => "Afternoon",
            Category::Honorarium => "Honorarium",
            Category::ServiceCredit => "Service Credit",
            Category::Overtime => "Overtime",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Morning => 0,
            Category::Afternoon => 1,
            Category::Honorarium => 2,
            Category::ServiceCredit => 3,
            Category::Overtime => 4,
        }
    }
}

/// Raw official-window boundaries for one category, as configured or as
/// carried on an exported row. Kept as `hh:mm:ss A` strings to match the
/// backend wire shape; parsed on resolution.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub start: String,
    pub end: String,
}

/// Official schedule windows per pay category.
///
/// This is both a section of the application config and the optional
/// per-row override block in an exported timesheet, so mixed employee
/// classes can share one export file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScheduleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morning: Option<WindowConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afternoon: Option<WindowConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honorarium: Option<WindowConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_credit: Option<WindowConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overtime: Option<WindowConfig>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
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
}

impl ScheduleConfig {
    /// Resolves the official window for a category.
    ///
    /// Returns `None` when the category is unconfigured, when a boundary
    /// does not parse, or when a supplemental category carries the
    /// midnight-to-midnight sentinel.
    pub fn window(&self, category: Category) -> Option<OfficialWindow> {
        let raw = self.raw(category)?;
        let start = TimeOfDay::parse(&raw.start).ok()?;
        let end = TimeOfDay::parse(&raw.end).ok()?;

        if category.is_supplemental() && start == TimeOfDay::midnight() && end == TimeOfDay::midnight() {
            return None;
        }

        Some(OfficialWindow { start, end })
    }

    /// Merges a per-row override over this schedule, field-wise.
    pub fn merged(&self, overlay: Option<&ScheduleConfig>) -> ScheduleConfig {
        let Some(overlay) = overlay else {
            return self.clone();
        };
        ScheduleConfig {
            morning: overlay.morning.clone().or_else(|| self.morning.clone()),
            afternoon: overlay.afternoon.clone().or_else(|| self.afternoon.clone()),
            honorarium: overlay.honorarium.clone().or_else(|| self.honorarium.clone()),
            service_credit: overlay.service_credit.clone().or_else(|| self.service_credit.clone()),
            overtime: overlay.overtime.clone().or_else(|| self.overtime.clone()),
        }
    }

    fn raw(&self, category: Category) -> Option<&WindowConfig> {
        match category {
            Category::Morning => self.morning.as_ref(),
            Category::Afternoon => self.afternoon.as_ref(),
            Category::Honorarium => self.honorarium.as_ref(),
            Category::ServiceCredit => self.service_credit.as_ref(),
            Category::Overtime => self.overtime.as_ref(),
        }
    }
}
