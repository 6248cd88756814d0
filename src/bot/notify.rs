//! Notification embed construction and best-effort delivery.
//!
//! Every handler funnels through [`notify`] (one guild) or [`broadcast`]
//! (several guilds): resolve the category's destination from the settings
//! store, and if one exists, attempt delivery. Delivery failures are logged
//! and swallowed so a deleted channel or revoked permission never breaks
//! event processing.

use entity::prelude::LogCategory;
use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Colour, Context, CreateEmbed, CreateEmbedAuthor, CreateMessage, GuildId,
    Mentionable, Message, RoleId, Timestamp,
};

use crate::{bot::profile::ProfileChange, service::LogSettingService};

/// Embed colours for the notification palette.
pub const GREEN: Colour = Colour(0x2ECC71);
pub const RED: Colour = Colour(0xE74C3C);
pub const BLUE: Colour = Colour(0x3498DB);

/// Checks whether a stored channel id still refers to a live channel in the
/// guild, using the gateway cache.
pub fn channel_is_live(ctx: &Context, guild_id: GuildId, channel_id: ChannelId) -> bool {
    ctx.cache
        .guild(guild_id)
        .is_some_and(|guild| guild.channels.contains_key(&channel_id))
}

/// Attempts delivery of one embed and never propagates failure.
pub async fn best_effort_send(ctx: &Context, channel_id: ChannelId, embed: CreateEmbed) {
    if let Err(e) = channel_id
        .send_message(&ctx.http, CreateMessage::new().embed(embed))
        .await
    {
        tracing::warn!("Failed to deliver log message to channel {}: {}", channel_id, e);
    }
}

/// Resolves the destination for one guild and category and sends if present.
///
/// Lookup errors are logged and treated as "no destination" so the triggering
/// event still counts as handled.
pub async fn notify(
    db: &DatabaseConnection,
    ctx: &Context,
    guild_id: GuildId,
    category: LogCategory,
    embed: CreateEmbed,
) {
    let service = LogSettingService::new(db);
    let destination = match service
        .resolve_destination(guild_id.get(), category, |channel| {
            channel_is_live(ctx, guild_id, channel)
        })
        .await
    {
        Ok(destination) => destination,
        Err(e) => {
            tracing::error!(
                "Failed to look up {} log settings for guild {}: {}",
                category,
                guild_id,
                e
            );
            return;
        }
    };

    if let Some(channel) = destination {
        best_effort_send(ctx, channel, embed).await;
    }
}

/// Sends one embed to every listed guild that has a destination configured.
///
/// An empty target list is a no-op; guilds without a configured, enabled,
/// live destination are skipped silently.
pub async fn broadcast(
    db: &DatabaseConnection,
    ctx: &Context,
    guild_ids: &[GuildId],
    category: LogCategory,
    embed: CreateEmbed,
) {
    if guild_ids.is_empty() {
        tracing::debug!("No target guilds for {} notification", category);
        return;
    }

    for guild_id in guild_ids {
        notify(db, ctx, *guild_id, category, embed.clone()).await;
    }
}

fn base_embed(title: &str, colour: Colour) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .colour(colour)
        .timestamp(Timestamp::now())
}

/// Join/leave notification for the traffic category.
pub fn traffic_embed(
    title: &str,
    colour: Colour,
    mention: &str,
    display_name: &str,
    avatar_url: &str,
) -> CreateEmbed {
    base_embed(title, colour)
        .description(format!("**Member:** {mention}"))
        .author(CreateEmbedAuthor::new(display_name).icon_url(avatar_url))
}

fn jump_link(guild_id: GuildId, message: &Message) -> String {
    format!(
        "[Jump to Message](https://discord.com/channels/{}/{}/{})",
        guild_id, message.channel_id, message.id
    )
}

/// Deleted-message notification, built from the cached copy of the message.
pub fn message_deleted_embed(guild_id: GuildId, message: &Message) -> CreateEmbed {
    base_embed("Message Deleted", RED)
        .field("Channel", message.channel_id.mention().to_string(), true)
        .field("Jump Link", jump_link(guild_id, message), true)
        .field("Content", message.content.clone(), false)
        .author(
            CreateEmbedAuthor::new(message.author.display_name()).icon_url(message.author.face()),
        )
}

/// Edited-message notification showing both versions of the content.
pub fn message_edited_embed(guild_id: GuildId, before: &Message, after: &Message) -> CreateEmbed {
    base_embed("Message Edited", BLUE)
        .field("Channel", before.channel_id.mention().to_string(), true)
        .field("Jump Link", jump_link(guild_id, before), true)
        .field("Before", before.content.clone(), false)
        .field("After", after.content.clone(), false)
        .author(
            CreateEmbedAuthor::new(before.author.display_name()).icon_url(before.author.face()),
        )
}

/// Voice movement notification; `None` channels render as "None".
pub fn voice_embed(
    mention: &str,
    before: Option<ChannelId>,
    after: Option<ChannelId>,
) -> CreateEmbed {
    let channel_ref = |channel: Option<ChannelId>| {
        channel
            .map(|c| c.mention().to_string())
            .unwrap_or_else(|| "None".to_string())
    };

    base_embed("Voice Update", BLUE)
        .description(format!("**Member:** {mention}"))
        .field("Before", channel_ref(before), true)
        .field("After", channel_ref(after), true)
}

fn role_mentions(roles: &[RoleId]) -> String {
    roles
        .iter()
        .map(|role| role.mention().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Maps one profile change to its category and notification embed.
///
/// `mention` and `display_name` describe the after-state of the account the
/// change belongs to.
pub fn profile_change_message(
    change: &ProfileChange,
    mention: &str,
    display_name: &str,
) -> (LogCategory, CreateEmbed) {
    match change {
        ProfileChange::DisplayName { before, after } => (
            LogCategory::Members,
            base_embed("Display Name Changed", BLUE)
                .description(format!("**Member:** {mention}"))
                .field("Before", before.clone(), true)
                .field("After", after.clone(), true),
        ),
        ProfileChange::Roles { added, removed } => {
            let mut embed = base_embed("Member Roles Updated", BLUE)
                .description(format!("**Member:** {mention}"));
            if !added.is_empty() {
                embed = embed.field("Added Roles", role_mentions(added), false);
            }
            if !removed.is_empty() {
                embed = embed.field("Removed Roles", role_mentions(removed), false);
            }
            (LogCategory::Roles, embed)
        }
        ProfileChange::Avatar { url } => (
            LogCategory::Members,
            base_embed("Avatar Changed", BLUE)
                .description(format!("**Member:** {mention}"))
                .author(CreateEmbedAuthor::new(display_name).icon_url(url))
                .thumbnail(url),
        ),
        ProfileChange::Boost { since } => {
            let embed = base_embed("Nitro Status Changed", BLUE)
                .description(format!("**Member:** {mention}"));
            let embed = match since {
                Some(ts) => embed.field(
                    "Nitro Boosted Since",
                    ts.to_utc().format("%Y-%m-%d %H:%M:%S").to_string(),
                    false,
                ),
                None => embed.field("Nitro Boosted", "No longer boosted", false),
            };
            (LogCategory::Members, embed)
        }
    }
}
