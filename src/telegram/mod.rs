//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod notifications;

// Re-exports for convenience
pub use bot::{create_bot, delete_commands, setup_commands, Bot, Command};
pub use handlers::{schema, HandlerDeps};
