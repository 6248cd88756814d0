use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Starts the Discord bot in a blocking manner.
///
/// Creates the client and runs it until shutdown. The gateway cache is left
/// enabled because the delete/edit and profile handlers depend on it for
/// before-state lookups.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `db` - Database connection shared with every event handler
///
/// # Returns
/// - `Ok(())` if the bot runs to a clean shutdown
/// - `Err(AppError)` if client construction or the connection fails
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged intents - they must be
    // enabled in the Discord Developer Portal.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db))
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
