//! Forecasting models for monthly demand series

use crate::data::MonthlySeries;
use crate::error::{ForecastError, Result};
use std::fmt::Debug;
use std::str::FromStr;

/// Forecast output of a trained model: one predicted quantity per future month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyForecast {
    /// Forecasted monthly quantities
    values: Vec<f64>,
    /// Number of months forecasted
    horizon: usize,
}

impl MonthlyForecast {
    /// Create a new forecast, checking that the value count matches the horizon.
    pub fn new(values: Vec<f64>, horizon: usize) -> Result<Self> {
        if values.len() != horizon {
            return Err(ForecastError::ValidationError(format!(
                "Values length ({}) doesn't match horizon ({})",
                values.len(),
                horizon
            )));
        }

        Ok(Self { values, horizon })
    }

    /// Get the forecasted values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of months forecasted
    pub fn horizon(&self) -> usize {
        self.horizon
    }
}

/// Trained demand model
pub trait TrainedDemandModel: Debug {
    /// Generate a forecast for the given number of future months
    fn forecast(&self, horizon: usize) -> Result<MonthlyForecast>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Demand model that can be trained on a monthly series
pub trait DemandModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedDemandModel;

    /// Train the model on a monthly usage series
    fn train(&self, series: &MonthlySeries) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

pub mod exponential_smoothing;
pub mod moving_average;
pub mod seasonal_naive;

pub use exponential_smoothing::ExponentialSmoothing;
pub use moving_average::MovingAverage;
pub use seasonal_naive::SeasonalNaive;

/// Model selection, as configured from the outside (CLI, environment).
///
/// Parsed from strings like `sma:3`, `ses:0.3`, or `seasonal`.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSpec {
    /// Moving average over the last `window` months
    MovingAverage { window: usize },
    /// Simple exponential smoothing with the given alpha
    ExponentialSmoothing { alpha: f64 },
    /// Same-month-last-year with mean fallback
    SeasonalNaive,
}

impl Default for ModelSpec {
    fn default() -> Self {
        ModelSpec::ExponentialSmoothing { alpha: 0.3 }
    }
}

impl FromStr for ModelSpec {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, param) = match s.split_once(':') {
            Some((kind, param)) => (kind, Some(param)),
            None => (s, None),
        };

        match kind {
            "sma" => {
                let window = param.unwrap_or("3").parse()?;
                Ok(ModelSpec::MovingAverage { window })
            }
            "ses" => {
                let alpha = param.unwrap_or("0.3").parse()?;
                Ok(ModelSpec::ExponentialSmoothing { alpha })
            }
            "seasonal" => Ok(ModelSpec::SeasonalNaive),
            _ => Err(ForecastError::InvalidParameter(format!(
                "Unknown model '{}', expected sma, ses, or seasonal",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_spec_parsing() {
        assert_eq!(
            "sma:6".parse::<ModelSpec>().unwrap(),
            ModelSpec::MovingAverage { window: 6 }
        );
        assert_eq!(
            "ses:0.5".parse::<ModelSpec>().unwrap(),
            ModelSpec::ExponentialSmoothing { alpha: 0.5 }
        );
        assert_eq!(
            "seasonal".parse::<ModelSpec>().unwrap(),
            ModelSpec::SeasonalNaive
        );
        assert!("arima".parse::<ModelSpec>().is_err());
        assert!("sma:x".parse::<ModelSpec>().is_err());
    }

    #[test]
    fn test_forecast_length_check() {
        assert!(MonthlyForecast::new(vec![1.0, 2.0], 3).is_err());
        let forecast = MonthlyForecast::new(vec![1.0, 2.0, 3.0], 3).unwrap();
        assert_eq!(forecast.horizon(), 3);
    }
}
