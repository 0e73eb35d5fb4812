//! # Demand Forecast
//!
//! A Rust library for forecasting monthly medicine demand from historical
//! usage records.
//!
//! ## Features
//!
//! - Usage record loading and validation (CSV or in-memory)
//! - Monthly aggregation with gap filling
//! - Forecasting models (Moving Average, Exponential Smoothing, Seasonal Naive)
//! - A forecast engine producing per-item monthly predictions
//! - Accuracy metrics for holdout evaluation
//!
//! ## Quick Start
//!
//! ```no_run
//! use demand_forecast::engine::{CsvHistorySource, ForecastEngine};
//! use demand_forecast::models::ModelSpec;
//!
//! # fn main() -> demand_forecast::error::Result<()> {
//! let source = CsvHistorySource::new("usage_history.csv");
//! let engine = ForecastEngine::new(source, ModelSpec::default(), 3);
//!
//! // One ordered monthly prediction sequence per item
//! let forecast = engine.forecast_monthly()?;
//! for (item_id, points) in forecast.iter() {
//!     println!("{item_id}: {points:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod data;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod models;

// Re-export commonly used types
pub use crate::data::{DemandHistory, MonthlySeries, Period, UsageRecord};
pub use crate::engine::{ForecastEngine, ForecastPoint, ForecastResult, HistorySource};
pub use crate::error::ForecastError;
pub use crate::models::{DemandModel, ModelSpec, MonthlyForecast};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
