//! # Dtr - Daily Time Record reconciliation
//!
//! A command-line utility that reconciles employee punch records against
//! configured official schedule windows and reports rendered time and
//! tardiness per pay category.
//!
//! ## Features
//!
//! - **Interval Reconciliation**: Clamps actual punch intervals into the
//!   official window of each pay category (morning, afternoon, honorarium,
//!   service credit, overtime)
//! - **Tardiness Accounting**: Measures shortfall against the official
//!   span, never against the employee's own clock-in
//! - **Period Totals**: Per-category sums plus the combined official-day
//!   rendered/tardiness pair for any date range
//! - **Schedule Configuration**: Interactive wizard for official windows,
//!   with per-row overrides for mixed employee classes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dtr::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
