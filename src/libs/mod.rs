pub mod clock;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod reconcile;
pub mod record;
pub mod schedule;
pub mod totals;
pub mod view;
pub mod window;
