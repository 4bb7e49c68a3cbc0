//! Telebase - Telegram bot service skeleton
//!
//! Wires a teloxide bot to a Redis-backed dialogue store and a MySQL
//! connection pool, with the process lifecycle already in place: typed
//! environment configuration, logging, command registration, developer
//! lifecycle notifications and graceful shutdown. Bot features grow out
//! of the handler schema.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, rate limiting
//! - `storage`: database pool and Redis session storage
//! - `telegram`: bot construction, dispatcher schema, notifications

pub mod cli;
pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use self::core::{config, AppError, AppResult, Config};
pub use self::storage::{Database, DialogueState, SessionStorage};
pub use self::telegram::{create_bot, schema, Bot, Command, HandlerDeps};
