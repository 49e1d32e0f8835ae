//! Report error types.

use query::QueryError;
use thiserror::Error;

/// Errors that can occur while configuring or running a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A query operator failed.
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// A configuration value could not be parsed.
    #[error("Invalid configuration: {variable}={value:?}")]
    Config {
        variable: &'static str,
        value: String,
    },
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
