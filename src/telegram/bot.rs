//! Bot instance creation and command registry
//!
//! This module contains:
//! - The `Bot` alias with HTML as the default parse mode
//! - Bot instance creation from the validated configuration
//! - Command enum definition and platform command registration

use reqwest::ClientBuilder;
use secrecy::ExposeSecret;
use teloxide::adaptors::DefaultParseMode;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;

use crate::core::config::{self, BotConfig};

/// Bot client with HTML as the default parse mode for outgoing messages
pub type Bot = DefaultParseMode<teloxide::Bot>;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "start the bot and show the greeting")]
    Start,
    #[command(description = "show what this bot can do")]
    Help,
}

/// Creates a Bot instance from the validated configuration
///
/// Uses an HTTP client with the ambient request timeout. Honors an
/// optional `BOT_API_URL` override for a self-hosted Bot API server.
///
/// # Errors
/// Returns an error if the HTTP client cannot be built or `BOT_API_URL`
/// is not a valid URL.
pub fn create_bot(config: &BotConfig) -> anyhow::Result<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = teloxide::Bot::with_client(config.token.expose_secret(), client);

    let bot = if let Ok(bot_api_url) = std::env::var("BOT_API_URL") {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(&bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        bot.set_api_url(url)
    } else {
        bot
    };

    Ok(bot.parse_mode(ParseMode::Html))
}

/// Registers the command list with the platform UI
pub async fn setup_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

/// Removes the registered command list; called on shutdown
pub async fn delete_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.delete_my_commands().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_descriptions_list_all_commands() {
        let descriptions = Command::descriptions().to_string();
        assert!(descriptions.contains("These commands are supported"));
        assert!(descriptions.contains("/start"));
        assert!(descriptions.contains("/help"));
    }

    #[test]
    fn test_command_parsing() {
        let cmd = Command::parse("/start", "examplebot").unwrap();
        assert_eq!(cmd, Command::Start);

        let cmd = Command::parse("/help@examplebot", "examplebot").unwrap();
        assert_eq!(cmd, Command::Help);
    }

    #[test]
    fn test_registered_command_count() {
        assert_eq!(Command::bot_commands().len(), 2);
    }
}
