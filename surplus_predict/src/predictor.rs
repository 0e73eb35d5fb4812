//! Surplus prediction derived from monthly demand forecasts

use crate::error::{Result, SurplusError};
use crate::stock::StockSource;
use demand_forecast::engine::{ForecastEngine, ForecastResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Surplus classification for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Stock exceeds predicted demand beyond the tolerance band
    Surplus,
    /// Stock is within the tolerance band around predicted demand
    Balanced,
    /// Stock falls short of predicted demand beyond the tolerance band
    Deficit,
}

/// Surplus prediction for one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurplusEntry {
    /// Predicted demand for the next month
    pub predicted_quantity: f64,
    /// Signed difference between stock on hand and predicted demand
    pub surplus: f64,
    /// Classification of the signed difference
    pub classification: Classification,
}

/// Per-item surplus predictions, bound to one forecast engine output.
///
/// Serializes as a plain JSON object keyed by item id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurplusResult {
    items: BTreeMap<String, SurplusEntry>,
}

impl SurplusResult {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, item_id: &str) -> Option<&SurplusEntry> {
        self.items.get(item_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SurplusEntry)> {
        self.items.iter()
    }

    pub fn item_ids(&self) -> impl Iterator<Item = &String> {
        self.items.keys()
    }
}

/// Thresholding rule turning a signed surplus into a classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurplusPolicy {
    /// Fraction of predicted demand treated as balanced around zero surplus
    balance_tolerance: f64,
}

impl SurplusPolicy {
    /// Create a policy with the given tolerance fraction (`0.0..1.0`).
    pub fn new(balance_tolerance: f64) -> Result<Self> {
        if !(0.0..1.0).contains(&balance_tolerance) {
            return Err(SurplusError::StockError(format!(
                "Balance tolerance must be in [0, 1), got {}",
                balance_tolerance
            )));
        }
        Ok(Self { balance_tolerance })
    }

    pub fn balance_tolerance(&self) -> f64 {
        self.balance_tolerance
    }

    /// Classify a signed surplus against the predicted demand.
    pub fn classify(&self, predicted: f64, surplus: f64) -> Classification {
        if predicted == 0.0 {
            return if surplus > 0.0 {
                Classification::Surplus
            } else {
                Classification::Balanced
            };
        }

        let ratio = surplus / predicted;
        if ratio > self.balance_tolerance {
            Classification::Surplus
        } else if ratio < -self.balance_tolerance {
            Classification::Deficit
        } else {
            Classification::Balanced
        }
    }
}

impl Default for SurplusPolicy {
    /// A 10% tolerance band around zero surplus.
    fn default() -> Self {
        Self {
            balance_tolerance: 0.1,
        }
    }
}

/// Surplus predictor comparing forecasted demand against stock on hand.
#[derive(Debug)]
pub struct SurplusPredictor {
    stock: Box<dyn StockSource>,
    policy: SurplusPolicy,
}

impl SurplusPredictor {
    pub fn new<S: StockSource + 'static>(stock: S, policy: SurplusPolicy) -> Self {
        Self {
            stock: Box::new(stock),
            policy,
        }
    }

    pub fn policy(&self) -> &SurplusPolicy {
        &self.policy
    }

    /// Run the forecast engine, then derive surplus predictions from its output.
    pub fn predict_surplus_auto(&self, engine: &ForecastEngine) -> Result<SurplusResult> {
        let forecast = engine.forecast_monthly()?;
        self.predict_from_forecast(&forecast)
    }

    /// Derive surplus predictions from an existing forecast.
    ///
    /// Uses each item's first forecast point (the next month) as the predicted
    /// demand. Every item in the output appeared in the forecast; items with
    /// no stock row count as zero on hand. An empty forecast yields an empty
    /// result.
    pub fn predict_from_forecast(&self, forecast: &ForecastResult) -> Result<SurplusResult> {
        if forecast.is_empty() {
            return Ok(SurplusResult::default());
        }

        let stock = self.stock.load()?;
        let mut items = BTreeMap::new();

        for (item_id, points) in forecast.iter() {
            let point = points.first().ok_or_else(|| {
                SurplusError::InvalidForecast(format!("No forecast points for item '{}'", item_id))
            })?;

            let predicted = point.quantity;
            if !predicted.is_finite() || predicted < 0.0 {
                return Err(SurplusError::InvalidForecast(format!(
                    "Predicted quantity {} for item '{}' is not usable",
                    predicted, item_id
                )));
            }

            let surplus = stock.on_hand(item_id) - predicted;
            items.insert(
                item_id.clone(),
                SurplusEntry {
                    predicted_quantity: predicted,
                    surplus,
                    classification: self.policy.classify(predicted, surplus),
                },
            );
        }

        Ok(SurplusResult { items })
    }
}
