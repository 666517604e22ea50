use std::env;
use std::time::Duration;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub binance_api_key: Option<String>,
    pub coinbase_api_key: Option<String>,
    pub coinswitch_api_key: Option<String>,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        // Server config
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        // Upstream API keys. All optional: the public endpoints answer
        // without them, and CoinSwitch has no API to spend its key on.
        let binance_api_key = env::var("BINANCE_API_KEY").ok();
        let coinbase_api_key = env::var("COINBASE_API_KEY").ok();
        let coinswitch_api_key = env::var("COINSWITCH_API_KEY").ok();

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse::<u64>()
            .map_err(|_| AppError::ConfigError("Invalid UPSTREAM_TIMEOUT_SECS".into()))?;

        Ok(Self {
            port,
            host,
            binance_api_key,
            coinbase_api_key,
            coinswitch_api_key,
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
        })
    }
}
