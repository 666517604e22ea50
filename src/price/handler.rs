use axum::{extract::State, Json};

use crate::error::AppError;
use crate::price::{model::PriceResponse, service::PriceService};

pub async fn binance_price(
  State(service): State<PriceService>,
) -> Result<Json<PriceResponse>, AppError> {
  let price = service.binance_inr().await?;
  Ok(Json(PriceResponse::inr("Binance", price)))
}

pub async fn coinbase_price(
  State(service): State<PriceService>,
) -> Result<Json<PriceResponse>, AppError> {
  let price = service.coinbase_inr().await?;
  Ok(Json(PriceResponse::inr("Coinbase", price)))
}

pub async fn coingecko_price(
  State(service): State<PriceService>,
) -> Result<Json<PriceResponse>, AppError> {
  let price = service.coingecko_inr().await?;
  Ok(Json(PriceResponse::inr("CoinGecko", price)))
}

pub async fn coinswitch_price(
  State(service): State<PriceService>,
) -> Result<Json<PriceResponse>, AppError> {
  let price = service.coinswitch_inr().await?;
  Ok(Json(PriceResponse::inr("CoinSwitch", price)))
}
