use std::path::PathBuf;
use thiserror::Error;

use crate::label::LabelCheckReport;

/// The main error type for boxmark operations.
#[derive(Debug, Error)]
pub enum BoxmarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config from {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid dataset layout at {path}: {message}")]
    LayoutInvalid { path: PathBuf, message: String },

    #[error("Failed to encode report as JSON: {0}")]
    ReportJson(#[from] serde_json::Error),

    #[error("Label check failed with {warning_count} warning(s)")]
    LabelCheckFailed {
        warning_count: usize,
        report: LabelCheckReport,
    },

    #[error("Unsupported output format: {0}")]
    UnsupportedOutput(String),
}
