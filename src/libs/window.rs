//! Official-window clamping.
//!
//! The payroll rule behind every category is the same: an employee earns
//! credit only for the portion of their actual punch interval that falls
//! inside the configured official window, and tardiness is always measured
//! against the official span, never against the employee's own clock-in.
//! What differs per category is how each edge of the interval is treated,
//! captured by [`WindowPolicy`].
//!
//! ## Policies
//!
//! - **Morning** — an arrival-only window. The end is always the official
//!   end (the lunch boundary); early arrival is clamped up to the official
//!   start; arriving after the window has closed forfeits it entirely.
//! - **Afternoon** — the mirror image: a departure-only window whose start
//!   is always the official start.
//! - **FullSpan** — both ends clamped independently into the window; used
//!   for honorarium, service credit and overtime sessions.
//!
//! Every no-credit outcome collapses to a midnight-to-midnight pair so the
//! rendered duration is exactly zero.

use crate::libs::clock::TimeOfDay;
use chrono::Duration;

/// A configured official schedule window for one pay category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfficialWindow {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl OfficialWindow {
    /// The full official span — the target a shortfall is measured against.
    pub fn span(&self) -> Duration {
        self.end.since(&self.start)
    }
}

/// Edge behavior selector for [`clamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPolicy {
    Morning,
    Afternoon,
    FullSpan,
}

/// Clamps an actual punch interval into an official window.
///
/// Returns the credited sub-interval. When the actual interval earns no
/// credit under the policy, both ends collapse to midnight.
pub fn clamp(actual_start: TimeOfDay, actual_end: TimeOfDay, window: &OfficialWindow, policy: WindowPolicy) -> (TimeOfDay, TimeOfDay) {
    let collapsed = (TimeOfDay::midnight(), TimeOfDay::midnight());

    let (start, end) = match policy {
        WindowPolicy::Morning => {
            // Arriving after the window closed forfeits the whole window.
            if actual_start > window.end {
                return collapsed;
            }
            (actual_start.max(window.start), window.end)
        }
        WindowPolicy::Afternoon => {
            // Leaving before the window opened forfeits the whole window.
            if actual_end < window.start {
                return collapsed;
            }
            (window.start, actual_end.min(window.end))
        }
        WindowPolicy::FullSpan => {
            if actual_end < window.start || actual_start > window.end {
                return collapsed;
            }
            (actual_start.max(window.start), actual_end.min(window.end))
        }
    };

    // Inverted pairs (e.g. punches recorded out of order) earn no credit.
    if end < start {
        return collapsed;
    }

    (start, end)
}
