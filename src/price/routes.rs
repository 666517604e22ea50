use axum::{routing::get, Router};

use crate::config::Config;
use crate::error::AppError;
use crate::price::{handler, service::PriceService};

pub fn price_routes(config: Config) -> Result<Router, AppError> {
  let service = PriceService::new(config)?;

  Ok(Router::new()
      .route("/binance", get(handler::binance_price))
      .route("/coinbase", get(handler::coinbase_price))
      .route("/coingecko", get(handler::coingecko_price))
      .route("/coinswitch", get(handler::coinswitch_price))
      .with_state(service))
}
