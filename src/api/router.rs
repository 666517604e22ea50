use axum::{
  http::StatusCode,
  routing::get,
  Json, Router,
};
use serde_json::json;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{config::Config, error::AppError, price::routes::price_routes};

pub fn create_router(config: Config) -> Result<Router, AppError> {
  // Allow frontend to access backend
  let cors = CorsLayer::new()
      .allow_origin(Any)
      .allow_methods(Any)
      .allow_headers(Any);

  let app = Router::new()
      .route("/health", get(health_check))
      .nest("/price", price_routes(config)?)
      .layer(TraceLayer::new_for_http())
      .layer(cors);

  Ok(app)
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
  (
      StatusCode::OK,
      Json(json!({
          "status": "success",
          "message": "Server is running"
      })),
  )
}
