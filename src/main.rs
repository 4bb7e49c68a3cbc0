use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use telebase::cli::{Cli, Commands};
use telebase::core::rate_limiter::RateLimiter;
use telebase::core::{config, init_logger, Config};
use telebase::storage::{fsm, Database};
use telebase::telegram::notifications::{notify_dev_started, notify_dev_stopped};
use telebase::telegram::{create_bot, delete_commands, schema, setup_commands, Bot, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (configuration, logging,
/// database, session storage, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present; never overrides
    // the real environment
    let _ = dotenv();

    match cli.command {
        Some(Commands::CheckConfig) => check_config(),
        Some(Commands::Run) | None => {
            let log_path = init_logger(&config::LOG_DIR)?;
            log::info!("Logging to {}", log_path.display());
            run_bot().await
        }
    }
}

/// Validates the environment and exits; nonzero exit code on a missing
/// or ill-typed variable.
fn check_config() -> Result<()> {
    let config = Config::from_env()?;
    println!("Configuration OK");
    println!("  developer chat: {}", config.bot.dev_id);
    println!("  session store:  {}", config.redis.dsn());
    println!(
        "  database:       {}@{}:{}/{}",
        config.database.username, config.database.host, config.database.port, config.database.database
    );
    Ok(())
}

/// Run the Telegram bot until it is stopped
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");
    let config = Arc::new(Config::from_env()?);

    let db = Database::connect(&config.database).await?;
    log::info!(
        "Database connection established ({}:{})",
        config.database.host,
        config.database.port
    );

    let storage = fsm::open(&config.redis).await?;
    log::info!("Session storage ready at {}", config.redis.dsn());

    let bot = create_bot(&config.bot)?;
    let me = bot.get_me().await?;
    log::info!("Authorized as @{} (id {})", me.username(), me.id);

    setup_commands(&bot).await?;
    notify_dev_started(&bot, config.bot.dev_id).await;

    let rate_limiter = Arc::new(RateLimiter::new(config::rate_limit::cooldown()));
    Arc::clone(&rate_limiter).spawn_cleanup_task(config::rate_limit::cleanup_interval());

    let deps = HandlerDeps::new(Arc::clone(&config), db.clone(), Arc::clone(&rate_limiter));
    let handler = schema(deps);

    // Polling only; drop any webhook a previous deployment may have left.
    bot.delete_webhook().await?;

    log::info!("Starting long polling...");
    let listener = Polling::builder(bot.clone()).build();
    Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![storage])
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    shutdown(&bot, &config, &db).await;
    Ok(())
}

/// Shutdown sequence, mirroring startup in reverse
async fn shutdown(bot: &Bot, config: &Config, db: &Database) {
    log::info!("Shutting down...");
    notify_dev_stopped(bot, config.bot.dev_id).await;

    if let Err(e) = delete_commands(bot).await {
        log::warn!("Failed to delete bot commands: {}", e);
    }
    if let Err(e) = bot.delete_webhook().await {
        log::warn!("Failed to delete webhook: {}", e);
    }

    db.close().await;
    log::info!("Shutdown complete");
}
