use serenity::all::{Command, Context, Ready};

use crate::bot::command::logs;

/// Handles the ready event when the bot connects to Discord.
///
/// Registers the `/logs` slash command globally. Registration is idempotent;
/// Discord replaces the existing definition on reconnect.
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    if let Err(e) = Command::create_global_command(&ctx.http, logs::register()).await {
        tracing::error!("Failed to register /logs command: {:?}", e);
    }
}
