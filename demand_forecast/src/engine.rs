//! Forecast engine: turns a demand history into per-item monthly predictions

use crate::data::{DemandHistory, MonthlySeries, Period, UsageRecord};
use crate::error::Result;
use crate::models::{
    DemandModel, ExponentialSmoothing, ModelSpec, MovingAverage, SeasonalNaive,
    TrainedDemandModel,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};

/// Source of historical demand data, the engine's external collaborator.
pub trait HistorySource: Debug + Send + Sync {
    /// Load the full usage history.
    fn load(&self) -> Result<DemandHistory>;
}

/// History source backed by a CSV file with `item_id,date,quantity` columns.
#[derive(Debug, Clone)]
pub struct CsvHistorySource {
    path: PathBuf,
}

impl CsvHistorySource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl HistorySource for CsvHistorySource {
    fn load(&self) -> Result<DemandHistory> {
        DemandHistory::from_csv(&self.path)
    }
}

/// In-memory history source, for tests and embedded data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    records: Vec<UsageRecord>,
}

impl InMemoryHistory {
    pub fn new(records: Vec<UsageRecord>) -> Self {
        Self { records }
    }
}

impl HistorySource for InMemoryHistory {
    fn load(&self) -> Result<DemandHistory> {
        DemandHistory::from_records(self.records.clone())
    }
}

/// One predicted month for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// The forecasted month
    pub period: Period,
    /// Predicted demand quantity, never negative
    pub quantity: f64,
}

/// Per-item monthly forecast, the engine's output contract.
///
/// Serializes as a plain JSON object keyed by item id, each value an ordered
/// array of `{period, quantity}` points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastResult {
    items: BTreeMap<String, Vec<ForecastPoint>>,
}

impl ForecastResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Predicted points for one item, in period order.
    pub fn get(&self, item_id: &str) -> Option<&[ForecastPoint]> {
        self.items.get(item_id).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<ForecastPoint>)> {
        self.items.iter()
    }

    pub fn item_ids(&self) -> impl Iterator<Item = &String> {
        self.items.keys()
    }

    /// Serialize the forecast to its wire JSON shape.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| crate::error::ForecastError::DataError(e.to_string()))
    }

    fn insert(&mut self, item_id: String, points: Vec<ForecastPoint>) {
        self.items.insert(item_id, points);
    }
}

/// Forecast engine producing monthly demand predictions per item.
#[derive(Debug)]
pub struct ForecastEngine {
    source: Box<dyn HistorySource>,
    model: ModelSpec,
    horizon: usize,
}

impl ForecastEngine {
    /// Create an engine over a history source.
    ///
    /// `horizon` is the number of future months predicted per item.
    pub fn new<S: HistorySource + 'static>(source: S, model: ModelSpec, horizon: usize) -> Self {
        Self {
            source: Box::new(source),
            model,
            horizon,
        }
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn model(&self) -> &ModelSpec {
        &self.model
    }

    /// Produce a monthly forecast for every item in the history.
    ///
    /// Each item's prediction sequence starts at the month after its last
    /// observation. An empty history yields an empty result rather than an
    /// error. Predicted quantities are clamped at zero.
    pub fn forecast_monthly(&self) -> Result<ForecastResult> {
        let history = self.source.load()?;
        let mut result = ForecastResult::default();

        for item_id in history.item_ids() {
            let series = match history.monthly_series(&item_id) {
                Some(series) if !series.is_empty() => series,
                _ => continue,
            };

            let values = self.run_model(&series)?;
            let start = series
                .last_period()
                .expect("non-empty series has a last period")
                .next();

            let mut period = start;
            let mut points = Vec::with_capacity(values.len());
            for value in values {
                points.push(ForecastPoint {
                    period,
                    quantity: value.max(0.0),
                });
                period = period.next();
            }

            result.insert(item_id, points);
        }

        Ok(result)
    }

    fn run_model(&self, series: &MonthlySeries) -> Result<Vec<f64>> {
        match &self.model {
            ModelSpec::MovingAverage { window } => {
                forecast_with(MovingAverage::new(*window)?, series, self.horizon)
            }
            ModelSpec::ExponentialSmoothing { alpha } => {
                forecast_with(ExponentialSmoothing::new(*alpha)?, series, self.horizon)
            }
            ModelSpec::SeasonalNaive => {
                forecast_with(SeasonalNaive::new(), series, self.horizon)
            }
        }
    }
}

fn forecast_with<M: DemandModel>(
    model: M,
    series: &MonthlySeries,
    horizon: usize,
) -> Result<Vec<f64>> {
    let trained = model.train(series)?;
    let forecast = trained.forecast(horizon)?;
    Ok(forecast.values().to_vec())
}
