//! Database and session storage functionality

pub mod db;
pub mod fsm;

// Re-exports for convenience
pub use db::Database;
pub use fsm::{DialogueState, SessionStorage, StateDialogue};
