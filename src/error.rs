use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading project records or exporting charts
#[derive(Debug, Error)]
pub enum DashError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: could not parse '{value}' in column {column} as a date")]
    InvalidDate {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: could not parse '{value}' in column {column} as a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: unknown status '{value}'")]
    UnknownStatus { row: usize, value: String },

    #[error("row {row}: unknown priority '{value}'")]
    UnknownPriority { row: usize, value: String },

    #[error("failed to write export: {0}")]
    Export(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashError>;
