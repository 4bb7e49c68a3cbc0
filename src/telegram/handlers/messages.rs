//! Plain message handler with per-chat throttling

use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerResult};
use crate::telegram::Bot;

/// Handles private text messages that are not commands.
///
/// Throttled messages are dropped without a reply so a spamming chat
/// cannot turn the throttle into a reply amplifier. The reply itself is
/// the skeleton placeholder pointing at /help.
pub(super) async fn handle_text_message(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> HandlerResult {
    let chat_id = msg.chat.id;

    if deps.rate_limiter.is_rate_limited(chat_id).await {
        log::debug!("Chat {} is rate limited, dropping message", chat_id);
        return Ok(());
    }
    deps.rate_limiter.touch(chat_id).await;

    bot.send_message(
        chat_id,
        "I don't understand that yet. See /help for the available commands.",
    )
    .await?;
    Ok(())
}
