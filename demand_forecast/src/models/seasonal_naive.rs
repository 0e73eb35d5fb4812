//! Seasonal naive model for monthly demand forecasting

use crate::data::MonthlySeries;
use crate::error::{ForecastError, Result};
use crate::models::{DemandModel, MonthlyForecast, TrainedDemandModel};
use std::collections::BTreeMap;

/// Seasonal naive model.
///
/// Forecasts each month with the most recent total observed for the same
/// calendar month. Months never observed fall back to the overall mean, so a
/// history shorter than a year still trains.
#[derive(Debug, Clone)]
pub struct SeasonalNaive {
    /// Name of the model
    name: String,
}

impl Default for SeasonalNaive {
    fn default() -> Self {
        Self::new()
    }
}

/// Trained seasonal naive model
#[derive(Debug, Clone)]
pub struct TrainedSeasonalNaive {
    /// Name of the model
    name: String,
    /// Most recent total per calendar month (1..=12)
    by_month: BTreeMap<u32, f64>,
    /// Mean of all monthly totals, used for unseen months
    mean: f64,
    /// Month of year following the last observation
    next_month: u32,
}

impl SeasonalNaive {
    /// Create a new seasonal naive model
    pub fn new() -> Self {
        Self {
            name: "Seasonal Naive".to_string(),
        }
    }
}

impl DemandModel for SeasonalNaive {
    type Trained = TrainedSeasonalNaive;

    fn train(&self, series: &MonthlySeries) -> Result<Self::Trained> {
        if series.is_empty() {
            return Err(ForecastError::DataError(
                "Empty monthly series".to_string(),
            ));
        }

        let mut by_month = BTreeMap::new();
        for (period, value) in series.points() {
            // Later periods overwrite earlier ones for the same calendar month
            by_month.insert(period.month(), *value);
        }

        let last = series
            .last_period()
            .expect("non-empty series has a last period");

        Ok(TrainedSeasonalNaive {
            name: self.name.clone(),
            by_month,
            mean: series.mean()?,
            next_month: last.next().month(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedDemandModel for TrainedSeasonalNaive {
    fn forecast(&self, horizon: usize) -> Result<MonthlyForecast> {
        let mut values = Vec::with_capacity(horizon);
        let mut month = self.next_month;

        for _ in 0..horizon {
            values.push(*self.by_month.get(&month).unwrap_or(&self.mean));
            month = if month == 12 { 1 } else { month + 1 };
        }

        MonthlyForecast::new(values, horizon)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
