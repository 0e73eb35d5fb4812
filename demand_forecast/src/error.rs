//! Error types for the demand_forecast crate

use thiserror::Error;

/// Custom error types for the demand_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to forecasting operations
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error from parsing dates or numbers in raw records
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<chrono::ParseError> for ForecastError {
    fn from(err: chrono::ParseError) -> Self {
        ForecastError::ParseError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for ForecastError {
    fn from(err: std::num::ParseIntError) -> Self {
        ForecastError::ParseError(err.to_string())
    }
}

impl From<std::num::ParseFloatError> for ForecastError {
    fn from(err: std::num::ParseFloatError) -> Self {
        ForecastError::ParseError(err.to_string())
    }
}
