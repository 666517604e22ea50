use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("Config error: {0}")]
  ConfigError(String),

  #[error("Upstream error from {upstream}: {message}")]
  UpstreamError {
      upstream: &'static str,
      message: String,
  },

  #[error("Upstream timeout from {0}")]
  UpstreamTimeout(&'static str),

  #[error("Malformed response from {upstream}: {message}")]
  MalformedResponse {
      upstream: &'static str,
      message: String,
  },
}

impl AppError {
  pub fn upstream(upstream: &'static str, err: reqwest::Error) -> Self {
      if err.is_timeout() {
          Self::UpstreamTimeout(upstream)
      } else if err.is_decode() {
          Self::MalformedResponse {
              upstream,
              message: err.to_string(),
          }
      } else {
          Self::UpstreamError {
              upstream,
              message: err.to_string(),
          }
      }
  }

  pub fn malformed(upstream: &'static str, message: impl Into<String>) -> Self {
      Self::MalformedResponse {
          upstream,
          message: message.into(),
      }
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
      let (status, error_message) = match self {
          AppError::ConfigError(_) => (
              StatusCode::INTERNAL_SERVER_ERROR,
              "A configuration error occurred".to_string(),
          ),
          AppError::UpstreamTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, self.to_string()),
          AppError::UpstreamError { .. } => (StatusCode::BAD_GATEWAY, self.to_string()),
          AppError::MalformedResponse { .. } => (StatusCode::BAD_GATEWAY, self.to_string()),
      };

      let body = Json(json!({
          "status": "error",
          "message": error_message,
      }));

      (status, body).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn timeout_maps_to_504() {
      let response = AppError::UpstreamTimeout("Binance").into_response();
      assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
  }

  #[test]
  fn upstream_failure_maps_to_502() {
      let response = AppError::UpstreamError {
          upstream: "Coinbase",
          message: "connection refused".into(),
      }
      .into_response();
      assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
  }

  #[test]
  fn missing_field_maps_to_502() {
      let response = AppError::malformed("CoinGecko", "missing bitcoin.inr").into_response();
      assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
  }
}
