pub mod api;
pub mod config;
pub mod error;
pub mod price;

// Re-export common modules
pub use api::router;
pub use config::Config;
pub use error::AppError;
