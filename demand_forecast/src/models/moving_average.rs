//! Moving average model for monthly demand forecasting

use crate::data::MonthlySeries;
use crate::error::{ForecastError, Result};
use crate::models::{DemandModel, MonthlyForecast, TrainedDemandModel};

/// Moving average model over the last `window` monthly totals.
///
/// The window is clamped to the series length at training time, so items with
/// short histories still produce a forecast.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    /// Name of the model
    name: String,
    /// Window size in months
    window: usize,
}

/// Trained moving average model
#[derive(Debug, Clone)]
pub struct TrainedMovingAverage {
    /// Name of the model
    name: String,
    /// Average of the last window of observations
    last_average: f64,
}

impl MovingAverage {
    /// Create a new moving average model
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Moving Average (window={})", window),
            window,
        })
    }
}

impl DemandModel for MovingAverage {
    type Trained = TrainedMovingAverage;

    fn train(&self, series: &MonthlySeries) -> Result<Self::Trained> {
        let values = series.values();
        if values.is_empty() {
            return Err(ForecastError::DataError(
                "Empty monthly series".to_string(),
            ));
        }

        let window = self.window.min(values.len());
        let last_average = values[values.len() - window..].iter().sum::<f64>() / window as f64;

        Ok(TrainedMovingAverage {
            name: self.name.clone(),
            last_average,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedDemandModel for TrainedMovingAverage {
    fn forecast(&self, horizon: usize) -> Result<MonthlyForecast> {
        // The moving average forecast is constant at the last window average
        let values = vec![self.last_average; horizon];

        MonthlyForecast::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
