//! # forecast_api
//!
//! REST API facade for the medicast forecasting pipeline.
//!
//! Exposes the two pipeline operations over HTTP:
//!
//! - `GET /forecast_monthly` returns the per-item monthly demand forecast
//! - `GET /predict_surplus_auto` returns surplus predictions derived from it
//!
//! plus `/` and `/health` liveness endpoints. All state lives in an explicit
//! [`AppState`] built at process entry; there are no ambient globals.

use axum::routing::get;
use axum::Router;
use demand_forecast::engine::ForecastEngine;
use std::sync::Arc;
use surplus_predict::SurplusPredictor;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod cache;
pub mod config;
pub mod error;
pub mod routes;

use crate::cache::ForecastCache;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ForecastEngine>,
    pub predictor: Arc<SurplusPredictor>,
    pub cache: Arc<ForecastCache>,
}

impl AppState {
    pub fn new(engine: ForecastEngine, predictor: SurplusPredictor, cache: ForecastCache) -> Self {
        Self {
            engine: Arc::new(engine),
            predictor: Arc::new(predictor),
            cache: Arc::new(cache),
        }
    }
}

/// Build the application router with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    // CORS configuration: unrestricted cross-origin access
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route("/forecast_monthly", get(routes::forecast_monthly))
        .route("/predict_surplus_auto", get(routes::predict_surplus_auto))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
