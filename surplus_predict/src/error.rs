//! Error types for the surplus_predict crate

use demand_forecast::error::ForecastError;
use thiserror::Error;

/// Custom error types for the surplus_predict crate
#[derive(Debug, Error)]
pub enum SurplusError {
    /// The upstream forecast engine failed
    #[error("Forecast failed: {0}")]
    Forecast(#[from] ForecastError),

    /// Error loading or validating stock levels
    #[error("Stock error: {0}")]
    StockError(String),

    /// The forecast contained a value the derivation cannot use
    #[error("Invalid forecast: {0}")]
    InvalidForecast(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, SurplusError>;
