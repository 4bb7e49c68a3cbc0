//! Command handler implementations (/start, /help, dev /status)

use teloxide::prelude::*;
use teloxide::types::Message;
use teloxide::utils::command::BotCommands;
use teloxide::utils::html;

use super::types::{HandlerDeps, HandlerResult};
use crate::storage::{DialogueState, StateDialogue};
use crate::telegram::bot::Command;
use crate::telegram::Bot;

/// Handle /start: reset the dialogue and greet the user
pub(super) async fn handle_start_command(bot: &Bot, msg: &Message, dialogue: &StateDialogue) -> HandlerResult {
    dialogue.update(DialogueState::Start).await?;

    let name = msg.from.as_ref().map(|u| u.first_name.as_str()).unwrap_or("there");
    bot.send_message(
        msg.chat.id,
        format!(
            "Hello, <b>{}</b>!\nThis bot is up and running. See /help for what it can do.",
            html::escape(name)
        ),
    )
    .await?;
    Ok(())
}

/// Handle /help: list the registered commands
pub(super) async fn handle_help_command(bot: &Bot, msg: &Message) -> HandlerResult {
    bot.send_message(msg.chat.id, Command::descriptions().to_string()).await?;
    Ok(())
}

/// Handle the hidden /status dev command: version, uptime and database
/// liveness. Silently ignored for anyone but the configured developer.
pub(super) async fn handle_status_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> HandlerResult {
    if !deps.is_from_dev(msg) {
        log::debug!("Ignoring /status from non-developer chat {}", msg.chat.id);
        return Ok(());
    }

    let uptime = deps.started_at.elapsed();
    let db_status = match deps.db.ping().await {
        Ok(()) => "ok".to_string(),
        Err(e) => format!("error: {}", e),
    };

    bot.send_message(
        msg.chat.id,
        format!(
            "<b>telebase v{}</b>\nuptime: {}s\ndatabase: {}",
            env!("CARGO_PKG_VERSION"),
            uptime.as_secs(),
            html::escape(&db_status),
        ),
    )
    .await?;
    Ok(())
}
