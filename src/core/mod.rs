//! Core utilities, configuration, and common functionality

pub mod config;
pub mod error;
pub mod logging;
pub mod rate_limiter;

// Re-exports for convenience
pub use config::Config;
pub use error::{AppError, AppResult};
pub use logging::init_logger;
