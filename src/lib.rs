//! Terminal dashboard over a CSV of project records: headline metrics,
//! distribution charts and a filterable Gantt timeline.

pub mod analytics;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;

pub use dashboard::DashboardState;
pub use error::DashError;
