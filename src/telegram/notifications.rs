//! Developer lifecycle notifications

use teloxide::prelude::*;

use crate::telegram::Bot;

/// Sends a text notification to the developer chat.
///
/// Failures are logged and swallowed: a missing or blocked developer chat
/// must never take the bot down.
pub async fn notify_dev(bot: &Bot, dev_id: i64, text: &str) {
    if let Err(e) = bot.send_message(ChatId(dev_id), text).await {
        log::error!("Failed to notify developer chat {}: {}", dev_id, e);
    }
}

/// Startup notice, sent once the bot is authorized and ready to poll
pub async fn notify_dev_started(bot: &Bot, dev_id: i64) {
    notify_dev(bot, dev_id, "#BotStarted").await;
}

/// Shutdown notice, sent before connections are torn down
pub async fn notify_dev_stopped(bot: &Bot, dev_id: i64) {
    notify_dev(bot, dev_id, "#BotStopped").await;
}
