//! # Surplus Predict
//!
//! Derives per-item surplus and deficit predictions from the monthly demand
//! forecasts produced by the `demand_forecast` crate.
//!
//! The predictor compares each item's predicted next-month demand against the
//! stock on hand and classifies the signed difference as surplus, balanced,
//! or deficit.
//!
//! ## Quick Start
//!
//! ```no_run
//! use demand_forecast::engine::{CsvHistorySource, ForecastEngine};
//! use demand_forecast::models::ModelSpec;
//! use surplus_predict::{CsvStockSource, SurplusPolicy, SurplusPredictor};
//!
//! # fn main() -> Result<(), surplus_predict::SurplusError> {
//! let engine = ForecastEngine::new(
//!     CsvHistorySource::new("usage_history.csv"),
//!     ModelSpec::default(),
//!     3,
//! );
//! let predictor = SurplusPredictor::new(
//!     CsvStockSource::new("stock_levels.csv"),
//!     SurplusPolicy::default(),
//! );
//!
//! let surplus = predictor.predict_surplus_auto(&engine)?;
//! for (item_id, entry) in surplus.iter() {
//!     println!("{item_id}: {:?}", entry.classification);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod predictor;
pub mod stock;

pub use crate::error::{Result, SurplusError};
pub use crate::predictor::{
    Classification, SurplusEntry, SurplusPolicy, SurplusPredictor, SurplusResult,
};
pub use crate::stock::{CsvStockSource, InMemoryStock, StockLevels, StockSource};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
