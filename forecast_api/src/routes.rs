//! API route handlers

use crate::error::ApiError;
use crate::AppState;
use axum::extract::State;
use axum::Json;
use demand_forecast::engine::ForecastResult;
use serde::Serialize;
use surplus_predict::SurplusResult;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub endpoints: [&'static str; 3],
}

/// Liveness message for the root endpoint
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Backend is running",
        status: "healthy",
    })
}

/// Health check with the fixed route list
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        endpoints: ["/", "/forecast_monthly", "/predict_surplus_auto"],
    })
}

/// Monthly demand forecast for every item in the history
pub async fn forecast_monthly(
    State(state): State<AppState>,
) -> Result<Json<ForecastResult>, ApiError> {
    let forecast = state
        .cache
        .get_or_compute(|| state.engine.forecast_monthly())?;
    Ok(Json(forecast))
}

/// Surplus predictions derived from the monthly forecast
pub async fn predict_surplus_auto(
    State(state): State<AppState>,
) -> Result<Json<SurplusResult>, ApiError> {
    let forecast = state
        .cache
        .get_or_compute(|| state.engine.forecast_monthly())
        .map_err(surplus_predict::SurplusError::from)?;
    let surplus = state.predictor.predict_from_forecast(&forecast)?;
    Ok(Json(surplus))
}
