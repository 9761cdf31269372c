//! Analytics error types.

use thiserror::Error;

/// Analytics errors.
#[derive(Error, Debug)]
pub enum AnalyticsError {
    /// Dataset download failed
    #[error("Dataset fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Dataset server answered with a non-success status
    #[error("Dataset fetch from {url} returned HTTP {status}")]
    FetchStatus {
        /// Requested URL
        url: String,
        /// Status code returned
        status: u16,
    },

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required column absent from the header row
    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    /// Required field could not be parsed
    #[error("Invalid {column} value '{value}' on data row {row}")]
    InvalidValue {
        /// 1-based data row, header excluded
        row: usize,
        /// Column name
        column: String,
        /// Raw field text
        value: String,
    },

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] launch_domain::DomainError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
