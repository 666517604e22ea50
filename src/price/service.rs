use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Number;

use crate::config::Config;
use crate::error::AppError;

/// Fixed USD to INR conversion rate applied to upstreams that quote in USD.
const USD_TO_INR: f64 = 83.0;

const BINANCE_TICKER_URL: &str = "https://api.binance.com/api/v3/ticker/price";
const COINBASE_SPOT_URL: &str = "https://api.coinbase.com/v2/prices/BTC-USD/spot";
const COINGECKO_SIMPLE_PRICE_URL: &str = "https://api.coingecko.com/api/v3/simple/price";

#[derive(Debug, Deserialize)]
struct BinanceTicker {
    price: String,
}

#[derive(Debug, Deserialize)]
struct CoinbaseSpot {
    data: CoinbaseAmount,
}

#[derive(Debug, Deserialize)]
struct CoinbaseAmount {
    amount: String,
}

#[derive(Debug, Deserialize)]
struct CoinGeckoSimplePrice {
    bitcoin: CoinGeckoQuote,
}

#[derive(Debug, Deserialize)]
struct CoinGeckoQuote {
    inr: Number,
}

#[derive(Clone)]
pub struct PriceService {
    client: Client,
    config: Config,
}

impl PriceService {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Binance quotes BTCUSDT in USD; converted with the fixed rate.
    pub async fn binance_inr(&self) -> Result<Number, AppError> {
        let mut request = self
            .client
            .get(BINANCE_TICKER_URL)
            .query(&[("symbol", "BTCUSDT")]);

        if let Some(key) = &self.config.binance_api_key {
            request = request.header("X-MBX-APIKEY", key);
        }

        let ticker: BinanceTicker = self.fetch("Binance", request).await?;
        usd_quote_to_inr("Binance", &ticker.price)
    }

    /// Coinbase quotes the BTC-USD spot price in USD; converted with the
    /// fixed rate.
    pub async fn coinbase_inr(&self) -> Result<Number, AppError> {
        let mut request = self.client.get(COINBASE_SPOT_URL);

        if let Some(key) = &self.config.coinbase_api_key {
            request = request.bearer_auth(key);
        }

        let spot: CoinbaseSpot = self.fetch("Coinbase", request).await?;
        usd_quote_to_inr("Coinbase", &spot.data.amount)
    }

    /// CoinGecko quotes bitcoin in INR directly; returned unmodified.
    pub async fn coingecko_inr(&self) -> Result<Number, AppError> {
        self.simple_price_inr("CoinGecko").await
    }

    /// CoinSwitch does not expose public ticker prices. The INR price is
    /// derived from CoinGecko market data and relabeled; the configured
    /// CoinSwitch API key is accepted but never sent anywhere.
    pub async fn coinswitch_inr(&self) -> Result<Number, AppError> {
        self.simple_price_inr("CoinSwitch").await
    }

    async fn simple_price_inr(&self, upstream: &'static str) -> Result<Number, AppError> {
        let request = self
            .client
            .get(COINGECKO_SIMPLE_PRICE_URL)
            .query(&[("ids", "bitcoin"), ("vs_currencies", "inr")]);

        let quote: CoinGeckoSimplePrice = self.fetch(upstream, request).await?;
        Ok(quote.bitcoin.inr)
    }

    /// Shared request path for every upstream: send, reject non-2xx,
    /// decode the JSON body into the upstream's response shape.
    async fn fetch<T: DeserializeOwned>(
        &self,
        upstream: &'static str,
        request: RequestBuilder,
    ) -> Result<T, AppError> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::upstream(upstream, e))?
            .error_for_status()
            .map_err(|e| AppError::upstream(upstream, e))?;

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::upstream(upstream, e))
    }
}

fn usd_quote_to_inr(upstream: &'static str, amount: &str) -> Result<Number, AppError> {
    let usd = amount
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::malformed(upstream, format!("Unparseable price {:?}", amount)))?;

    let inr = round_2dp(usd * USD_TO_INR);
    Number::from_f64(inr)
        .ok_or_else(|| AppError::malformed(upstream, format!("Non-finite price {:?}", amount)))
}

fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_binance_usd_quote_to_inr() {
        let ticker: BinanceTicker = serde_json::from_str(r#"{"price": "65000.00"}"#).unwrap();
        let inr = usd_quote_to_inr("Binance", &ticker.price).unwrap();
        assert_eq!(inr.as_f64().unwrap(), 5395000.0);
    }

    #[test]
    fn converts_coinbase_spot_to_inr() {
        let spot: CoinbaseSpot =
            serde_json::from_str(r#"{"data": {"base": "BTC", "currency": "USD", "amount": "64123.45"}}"#)
                .unwrap();
        let inr = usd_quote_to_inr("Coinbase", &spot.data.amount).unwrap();
        assert_eq!(inr.as_f64().unwrap(), round_2dp(64123.45 * 83.0));
    }

    #[test]
    fn conversion_rounds_to_two_decimals() {
        let inr = usd_quote_to_inr("Binance", "100.123").unwrap();
        assert_eq!(inr.as_f64().unwrap(), 8310.21);
    }

    #[test]
    fn coingecko_inr_value_passes_through_unrounded() {
        let quote: CoinGeckoSimplePrice =
            serde_json::from_str(r#"{"bitcoin": {"inr": 5500000}}"#).unwrap();
        assert_eq!(quote.bitcoin.inr.to_string(), "5500000");
    }

    #[test]
    fn unparseable_upstream_price_is_rejected() {
        let err = usd_quote_to_inr("Binance", "not-a-number").unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse { .. }));
    }

    #[test]
    fn missing_expected_field_fails_decode() {
        let result: Result<CoinGeckoSimplePrice, _> = serde_json::from_str(r#"{"ethereum": {"inr": 1}}"#);
        assert!(result.is_err());
    }
}
