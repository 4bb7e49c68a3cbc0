//! Handler types and dependencies

use std::sync::Arc;
use std::time::Instant;

use teloxide::types::Message;

use crate::core::config::Config;
use crate::core::rate_limiter::RateLimiter;
use crate::storage::Database;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for handlers
pub type HandlerResult = Result<(), HandlerError>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub config: Arc<Config>,
    pub db: Database,
    pub rate_limiter: Arc<RateLimiter>,
    /// Process start, for the /status uptime report
    pub started_at: Instant,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(config: Arc<Config>, db: Database, rate_limiter: Arc<RateLimiter>) -> Self {
        Self {
            config,
            db,
            rate_limiter,
            started_at: Instant::now(),
        }
    }

    /// Whether the message comes from the privileged developer
    pub fn is_from_dev(&self, msg: &Message) -> bool {
        msg.from
            .as_ref()
            .and_then(|user| i64::try_from(user.id.0).ok())
            .is_some_and(|id| id == self.config.bot.dev_id)
    }
}
