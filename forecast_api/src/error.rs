//! Typed error-to-response mapping for the API facade

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use demand_forecast::error::ForecastError;
use surplus_predict::SurplusError;
use thiserror::Error;

/// Errors a handler can surface to a client.
///
/// Engine failures never crash the process; they are logged in full and
/// returned as a 500 with a fixed detail prefix per pipeline stage.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Forecast error: {0}")]
    Forecast(#[from] ForecastError),

    #[error("Surplus prediction error: {0}")]
    Surplus(#[from] SurplusError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "handler failed");

        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
