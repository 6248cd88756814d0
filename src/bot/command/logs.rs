use entity::prelude::LogCategory;
use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateInteractionResponse, CreateInteractionResponseMessage, Mentionable,
    Permissions, ResolvedValue,
};

use crate::service::{log_setting::ConfigureOutcome, LogSettingService};

pub const NAME: &str = "logs";

/// Builds the `/logs` command definition.
///
/// The command is guild-only and restricted to members who can manage
/// channels. With only a category it reports current settings; supplying a
/// channel and/or enabled flag merges those values over the stored row.
pub fn register() -> CreateCommand {
    let mut category = CreateCommandOption::new(
        CommandOptionType::String,
        "category",
        "Category of events to configure",
    )
    .required(true);
    for cat in LogCategory::ALL {
        category = category.add_string_choice(cat.as_str(), cat.as_str());
    }

    CreateCommand::new(NAME)
        .description(
            "Configure log channels for various events. Displays current settings if no \
             parameters are given.",
        )
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
        .dm_permission(false)
        .add_option(category)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "channel",
                "Channel where logs will be sent",
            )
            .channel_types(vec![ChannelType::Text])
            .required(false),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Boolean,
                "enabled",
                "Enable or disable the logs",
            )
            .required(false),
        )
}

/// Executes one `/logs` invocation.
pub async fn run(db: &DatabaseConnection, ctx: &Context, command: &CommandInteraction) {
    // dm_permission(false) already hides the command in DMs; this guards
    // against stale registrations.
    let Some(guild_id) = command.guild_id else {
        respond(ctx, command, "This command can only be used in a server.").await;
        return;
    };

    let mut category = None;
    let mut channel: Option<ChannelId> = None;
    let mut enabled = None;
    for option in command.data.options() {
        match (option.name, option.value) {
            ("category", ResolvedValue::String(value)) => category = LogCategory::from_str(value),
            ("channel", ResolvedValue::Channel(value)) => channel = Some(value.id),
            ("enabled", ResolvedValue::Boolean(value)) => enabled = Some(value),
            _ => {}
        }
    }

    let Some(category) = category else {
        respond(ctx, command, "Unknown log category.").await;
        return;
    };

    let service = LogSettingService::new(db);
    let outcome = match service
        .configure(guild_id.get(), category, channel.map(|c| c.get()), enabled)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(
                "Failed to update {} log settings for guild {}: {}",
                category,
                guild_id,
                e
            );
            respond(ctx, command, "Failed to update log settings.").await;
            return;
        }
    };

    let reply = match outcome {
        ConfigureOutcome::Report {
            channel_id,
            enabled,
        } => {
            let channel_str = if channel_id != 0 {
                ChannelId::new(channel_id).mention().to_string()
            } else {
                "None".to_string()
            };
            let enabled_str = if enabled { "enabled" } else { "disabled" };
            format!(
                "Logs settings for {category}:\n- Channel set to {channel_str}\n- Logs are \
                 {enabled_str}"
            )
        }
        ConfigureOutcome::Updated { .. } => {
            // Echo only the fields the caller actually supplied.
            let channel_str = channel
                .map(|c| format!("\n- Channel set to {}", c.mention()))
                .unwrap_or_default();
            let enabled_str = enabled
                .map(|e| format!("\n- Logs {}", if e { "enabled" } else { "disabled" }))
                .unwrap_or_default();
            format!(
                "Log channel for {category} has been updated \
                 successfully:{channel_str}{enabled_str}"
            )
        }
    };

    respond(ctx, command, &reply).await;
}

async fn respond(ctx: &Context, command: &CommandInteraction, content: &str) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(true),
    );
    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::warn!("Failed to respond to /{} command: {}", NAME, e);
    }
}
