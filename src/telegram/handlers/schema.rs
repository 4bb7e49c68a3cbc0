//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{ChatMemberStatus, ChatMemberUpdated, InlineQuery, InlineQueryResult, Message};

use super::commands::{handle_help_command, handle_start_command, handle_status_command};
use super::messages::handle_text_message;
use super::types::{HandlerDeps, HandlerError};
use crate::storage::{DialogueState, SessionStorage, StateDialogue};
use crate::telegram::bot::Command;
use crate::telegram::Bot;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. The same schema is used in production and in integration
/// tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_status = deps.clone();
    let deps_messages = deps;

    dptree::entry()
        // Hidden dev command (not in the Command enum)
        .branch(status_handler(deps_status))
        // Command handler
        .branch(command_handler())
        // Plain private messages
        .branch(message_handler(deps_messages))
        // Callback query handler
        .branch(callback_handler())
        // Bot membership transitions (blocked/unblocked, added/removed)
        .branch(chat_member_handler())
        // Inline query handler
        .branch(inline_handler())
}

/// Handler for the hidden /status dev command (not in the Command enum)
fn status_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| {
            msg.text()
                .map(|text| text == "/status" || text.starts_with("/status "))
                .unwrap_or(false)
        })
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move { handle_status_command(&bot, &msg, &deps).await }
        })
}

/// Handler for bot commands (/start, /help)
fn command_handler() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .enter_dialogue::<Message, SessionStorage, DialogueState>()
        .filter(|msg: Message| msg.chat.is_private())
        .filter_command::<Command>()
        .endpoint(
            |bot: Bot, msg: Message, cmd: Command, dialogue: StateDialogue| async move {
                log::info!("Received command {:?} from chat {}", cmd, msg.chat.id);
                match cmd {
                    Command::Start => handle_start_command(&bot, &msg, &dialogue).await,
                    Command::Help => handle_help_command(&bot, &msg).await,
                }
            },
        )
}

/// Handler for private text messages that are not commands
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .enter_dialogue::<Message, SessionStorage, DialogueState>()
        .filter(|msg: Message| msg.chat.is_private() && msg.text().is_some())
        .branch(
            dptree::case![DialogueState::Start].endpoint(move |bot: Bot, msg: Message| {
                let deps = deps.clone();
                async move { handle_text_message(&bot, &msg, &deps).await }
            }),
        )
}

/// Handler for callback queries (inline keyboard buttons)
fn callback_handler() -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(|bot: Bot, q: CallbackQuery| async move {
        // No interactive menus in the skeleton yet; stop the button spinner.
        log::debug!("Callback query from user {}: {:?}", q.from.id, q.data);
        bot.answer_callback_query(q.id).await?;
        Ok(())
    })
}

/// Handler for the bot's own membership updates
fn chat_member_handler() -> UpdateHandler<HandlerError> {
    Update::filter_my_chat_member().endpoint(|upd: ChatMemberUpdated| async move {
        let was_present = is_present(&upd.old_chat_member.kind.status());
        let is_present_now = is_present(&upd.new_chat_member.kind.status());

        if upd.chat.is_private() {
            if was_present && !is_present_now {
                log::info!("Bot was blocked in chat {}", upd.chat.id);
            } else if !was_present && is_present_now {
                log::info!("Bot was unblocked in chat {}", upd.chat.id);
            }
        } else {
            log::info!(
                "Membership in chat {} changed: {:?} -> {:?}",
                upd.chat.id,
                upd.old_chat_member.kind.status(),
                upd.new_chat_member.kind.status()
            );
        }
        Ok(())
    })
}

/// Handler for inline queries
fn inline_handler() -> UpdateHandler<HandlerError> {
    Update::filter_inline_query().endpoint(|bot: Bot, q: InlineQuery| async move {
        // The skeleton offers no inline content; answer so clients don't
        // show a perpetual loading state.
        let results: Vec<InlineQueryResult> = Vec::new();
        bot.answer_inline_query(q.id, results).await?;
        Ok(())
    })
}

fn is_present(status: &ChatMemberStatus) -> bool {
    !matches!(status, ChatMemberStatus::Left | ChatMemberStatus::Banned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_statuses() {
        assert!(is_present(&ChatMemberStatus::Member));
        assert!(is_present(&ChatMemberStatus::Administrator));
        assert!(!is_present(&ChatMemberStatus::Left));
        assert!(!is_present(&ChatMemberStatus::Banned));
    }
}
