//! Accuracy metrics for evaluating demand forecasts

use crate::error::{ForecastError, Result};

/// Accuracy metrics for a forecast against actual observations
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error (over non-zero actuals)
    pub mape: f64,
}

/// Split a series into training and test sets
pub fn train_test_split(data: &[f64], test_ratio: f64) -> (Vec<f64>, Vec<f64>) {
    if data.is_empty() || test_ratio <= 0.0 || test_ratio >= 1.0 {
        return (data.to_vec(), Vec::new());
    }

    let test_size = (data.len() as f64 * test_ratio).round() as usize;
    let train_size = data.len() - test_size;

    (data[..train_size].to_vec(), data[train_size..].to_vec())
}

/// Calculate accuracy metrics for a forecast vs actual values
pub fn forecast_accuracy(forecast: &[f64], actual: &[f64]) -> Result<ForecastAccuracy> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::ValidationError(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = forecast.len() as f64;

    let errors: Vec<f64> = forecast
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| a - f)
        .collect();

    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = errors.iter().map(|e| e.powi(2)).sum::<f64>() / n;
    let rmse = mse.sqrt();

    let mape = actual
        .iter()
        .zip(errors.iter())
        .filter(|(&a, _)| a != 0.0)
        .map(|(&a, &e)| (e.abs() / a.abs()) * 100.0)
        .sum::<f64>()
        / n;

    Ok(ForecastAccuracy {
        mae,
        mse,
        rmse,
        mape,
    })
}
