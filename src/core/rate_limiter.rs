use std::collections::HashMap;
use std::sync::Arc;

use teloxide::types::ChatId;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Per-chat cooldown tracker.
///
/// Limits how often each chat gets a handled reply, the message-throttling
/// middleware of the dispatcher. Entries expire on their own; a periodic
/// cleanup task keeps the map from growing with one entry per chat ever
/// seen.
#[derive(Clone)]
pub struct RateLimiter {
    /// Per-chat deadline before which further messages are throttled
    limits: Arc<Mutex<HashMap<ChatId, Instant>>>,
    cooldown: Duration,
}

impl RateLimiter {
    /// Creates a rate limiter with the given cooldown between handled
    /// messages per chat.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            limits: Arc::new(Mutex::new(HashMap::new())),
            cooldown,
        }
    }

    /// Returns `true` while the chat is still inside its cooldown window.
    pub async fn is_rate_limited(&self, chat_id: ChatId) -> bool {
        let limits = self.limits.lock().await;
        matches!(limits.get(&chat_id), Some(&deadline) if Instant::now() < deadline)
    }

    /// Remaining time until the chat may be handled again, if throttled.
    pub async fn remaining(&self, chat_id: ChatId) -> Option<Duration> {
        let limits = self.limits.lock().await;
        let deadline = limits.get(&chat_id)?;
        let now = Instant::now();
        (now < *deadline).then(|| *deadline - now)
    }

    /// Starts a new cooldown window for the chat. Called after a message
    /// has been handled.
    pub async fn touch(&self, chat_id: ChatId) {
        let mut limits = self.limits.lock().await;
        limits.insert(chat_id, Instant::now() + self.cooldown);
    }

    /// Clears the cooldown for a chat.
    pub async fn reset(&self, chat_id: ChatId) {
        let mut limits = self.limits.lock().await;
        limits.remove(&chat_id);
    }

    /// Spawns a background task that periodically drops expired entries.
    pub fn spawn_cleanup_task(self: Arc<Self>, every: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let mut limits = self.limits.lock().await;
                let before = limits.len();
                let now = Instant::now();
                limits.retain(|_, deadline| *deadline > now);
                let removed = before - limits.len();
                if removed > 0 {
                    log::debug!("Rate limiter cleanup removed {} expired entries", removed);
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAT: ChatId = ChatId(123456789);

    #[tokio::test(start_paused = true)]
    async fn test_first_message_is_not_limited() {
        let limiter = RateLimiter::new(Duration::from_secs(2));
        assert!(!limiter.is_rate_limited(CHAT).await);
        assert!(limiter.remaining(CHAT).await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_touch_starts_cooldown_window() {
        let limiter = RateLimiter::new(Duration::from_secs(2));
        limiter.touch(CHAT).await;

        assert!(limiter.is_rate_limited(CHAT).await);
        let remaining = limiter.remaining(CHAT).await.unwrap();
        assert!(remaining <= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_expires() {
        let limiter = RateLimiter::new(Duration::from_secs(2));
        limiter.touch(CHAT).await;

        tokio::time::advance(Duration::from_secs(3)).await;
        assert!(!limiter.is_rate_limited(CHAT).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_clears_cooldown() {
        let limiter = RateLimiter::new(Duration::from_secs(30));
        limiter.touch(CHAT).await;
        limiter.reset(CHAT).await;

        assert!(!limiter.is_rate_limited(CHAT).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chats_are_limited_independently() {
        let limiter = RateLimiter::new(Duration::from_secs(2));
        limiter.touch(CHAT).await;

        assert!(limiter.is_rate_limited(CHAT).await);
        assert!(!limiter.is_rate_limited(ChatId(987654321)).await);
    }
}
