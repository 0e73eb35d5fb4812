//! Medicast API server entry point

use demand_forecast::engine::{CsvHistorySource, ForecastEngine};
use forecast_api::cache::ForecastCache;
use forecast_api::config::Config;
use forecast_api::AppState;
use surplus_predict::{CsvStockSource, SurplusPolicy, SurplusPredictor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    let engine = ForecastEngine::new(
        CsvHistorySource::new(&config.history_csv),
        config.model.clone(),
        config.horizon,
    );
    let predictor = SurplusPredictor::new(
        CsvStockSource::new(&config.stock_csv),
        SurplusPolicy::new(config.balance_tolerance).expect("Invalid balance tolerance"),
    );
    let state = AppState::new(engine, predictor, ForecastCache::new(config.cache_ttl));

    let app = forecast_api::app(state);

    let addr = config.bind_addr();
    tracing::info!(
        "forecast_api v{} listening on {}",
        env!("CARGO_PKG_VERSION"),
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
