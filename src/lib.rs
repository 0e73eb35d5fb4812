//! # Medicast
//!
//! Workspace umbrella crate for the medicast forecasting pipeline.
//!
//! The pipeline has two stages:
//!
//! - [`demand_forecast`] turns historical usage records into per-item monthly
//!   demand predictions.
//! - [`surplus_predict`] compares those predictions against stock on hand and
//!   classifies each item as surplus, balanced, or deficit.
//!
//! The HTTP facade lives in the `forecast_api` binary crate.
//!
//! ## Example
//!
//! ```
//! use medicast::demand_forecast::data::UsageRecord;
//!
//! let record = UsageRecord::new("amoxicillin", "2024-03-14".parse().unwrap(), 12.0);
//! assert_eq!(record.item_id, "amoxicillin");
//! ```

pub use demand_forecast;
pub use surplus_predict;
