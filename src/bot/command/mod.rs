//! Slash command registration and dispatch.

pub mod logs;

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Interaction};

/// Routes interaction events to their command implementations.
pub async fn handle_interaction(db: &DatabaseConnection, ctx: Context, interaction: Interaction) {
    if let Interaction::Command(command) = interaction {
        match command.data.name.as_str() {
            logs::NAME => logs::run(db, &ctx, &command).await,
            other => tracing::warn!("Received unknown command /{}", other),
        }
    }
}
