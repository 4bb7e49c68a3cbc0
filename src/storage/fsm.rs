//! Redis-backed dialogue (session) storage
//!
//! Dialogue state lives in Redis so it survives restarts and is shared
//! across replicas. The JSON serializer keeps stored values readable when
//! inspecting the store by hand.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::serializer::Json;
use teloxide::dispatching::dialogue::{Dialogue, RedisStorage};

use crate::core::config::RedisConfig;
use crate::core::error::{AppError, AppResult};

/// Storage backend for dialogue state
pub type SessionStorage = RedisStorage<Json>;

/// Dialogue handle used by handlers
pub type StateDialogue = Dialogue<DialogueState, SessionStorage>;

/// Per-chat dialogue state.
///
/// The skeleton only has the idle state; bot features add their own
/// variants and route on them with `dptree::case!`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueState {
    #[default]
    Start,
}

/// Opens the session storage at the configured DSN.
///
/// A failure here is fatal at startup: the dispatcher cannot run without
/// its state store.
pub async fn open(config: &RedisConfig) -> AppResult<Arc<SessionStorage>> {
    let dsn = config.dsn();
    RedisStorage::open(dsn.as_str(), Json)
        .await
        .map_err(|e| AppError::Storage(format!("failed to open session storage at {}: {}", dsn, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dialogue_state_defaults_to_start() {
        assert_eq!(DialogueState::default(), DialogueState::Start);
    }

    #[test]
    fn test_dialogue_state_round_trips_through_json() {
        // Same serializer the Redis storage uses.
        let encoded = serde_json::to_string(&DialogueState::Start).unwrap();
        let decoded: DialogueState = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, DialogueState::Start);
    }
}
