//! Exponential smoothing model for monthly demand forecasting

use crate::data::MonthlySeries;
use crate::error::{ForecastError, Result};
use crate::models::{DemandModel, MonthlyForecast, TrainedDemandModel};

/// Simple exponential smoothing model
#[derive(Debug, Clone)]
pub struct ExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Smoothing parameter
    alpha: f64,
}

/// Trained exponential smoothing model
#[derive(Debug, Clone)]
pub struct TrainedExponentialSmoothing {
    /// Name of the model
    name: String,
    /// Current level
    level: f64,
}

impl ExponentialSmoothing {
    /// Create a new exponential smoothing model
    pub fn new(alpha: f64) -> Result<Self> {
        if alpha <= 0.0 || alpha >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "Alpha must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Exponential Smoothing (alpha={})", alpha),
            alpha,
        })
    }
}

impl DemandModel for ExponentialSmoothing {
    type Trained = TrainedExponentialSmoothing;

    fn train(&self, series: &MonthlySeries) -> Result<Self::Trained> {
        let values = series.values();
        if values.is_empty() {
            return Err(ForecastError::DataError(
                "Empty monthly series".to_string(),
            ));
        }

        // Initialize level with the first observation
        let mut level = values[0];

        // Update level using the exponential smoothing formula
        for &value in &values[1..] {
            level = self.alpha * value + (1.0 - self.alpha) * level;
        }

        Ok(TrainedExponentialSmoothing {
            name: self.name.clone(),
            level,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedDemandModel for TrainedExponentialSmoothing {
    fn forecast(&self, horizon: usize) -> Result<MonthlyForecast> {
        // In simple exponential smoothing, the forecast is constant at the last level
        let values = vec![self.level; horizon];

        MonthlyForecast::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
