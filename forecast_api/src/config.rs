//! Environment-driven server configuration

use demand_forecast::models::ModelSpec;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors surfaced at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {message}")]
    InvalidValue { name: &'static str, message: String },
}

/// Server configuration, read from the environment.
///
/// Every field has a default so a bare process starts; `.env` files are
/// loaded by `main` before this is constructed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host (`HOST`, default `0.0.0.0`)
    pub host: String,
    /// Bind port (`PORT`, default `8080`)
    pub port: u16,
    /// Usage history CSV path (`HISTORY_CSV`, default `data/usage_history.csv`)
    pub history_csv: PathBuf,
    /// Stock levels CSV path (`STOCK_CSV`, default `data/stock_levels.csv`)
    pub stock_csv: PathBuf,
    /// Months to forecast per item (`FORECAST_HORIZON`, default 3)
    pub horizon: usize,
    /// Model selection (`FORECAST_MODEL`, e.g. `sma:3`, `ses:0.3`, `seasonal`)
    pub model: ModelSpec,
    /// Forecast cache time-to-live (`CACHE_TTL_SECS`, default 60; 0 disables reuse)
    pub cache_ttl: Duration,
    /// Surplus balance tolerance fraction (`BALANCE_TOLERANCE`, default 0.1)
    pub balance_tolerance: f64,
}

impl Config {
    /// Read the configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_var("PORT", 8080)?,
            history_csv: env::var("HISTORY_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/usage_history.csv")),
            stock_csv: env::var("STOCK_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/stock_levels.csv")),
            horizon: parse_var("FORECAST_HORIZON", 3)?,
            model: parse_var("FORECAST_MODEL", ModelSpec::default())?,
            cache_ttl: Duration::from_secs(parse_var("CACHE_TTL_SECS", 60)?),
            balance_tolerance: parse_var("BALANCE_TOLERANCE", 0.1)?,
        })
    }

    /// Bind address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            message: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
