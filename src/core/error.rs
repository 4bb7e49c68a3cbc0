use thiserror::Error;

use crate::core::config::ConfigError;

/// Centralized error types for the application
///
/// All errors in the application are converted to this enum for consistent
/// error handling. Uses `thiserror` for automatic conversion and display
/// formatting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors raised at process start
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Session storage (Redis) errors
    #[error("Session storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Anyhow errors (for general error handling)
    #[error("Application error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = AppError::from(ConfigError::Missing("BOT_TOKEN"));
        assert_eq!(
            err.to_string(),
            "Configuration error: BOT_TOKEN environment variable is not set"
        );
    }

    #[test]
    fn test_storage_error_display() {
        let err = AppError::Storage("connection refused".to_string());
        assert_eq!(err.to_string(), "Session storage error: connection refused");
    }
}
