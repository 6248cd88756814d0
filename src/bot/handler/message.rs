use entity::prelude::LogCategory;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, Context, GuildId, Message, MessageId, MessageUpdateEvent};

use crate::bot::notify;

/// The guild a deletion should be reported to, when it should be reported at
/// all. Direct messages and bot-authored messages yield `None`.
fn delete_report_target(guild_id: Option<GuildId>, message: &Message) -> Option<GuildId> {
    guild_id.filter(|_| !message.author.bot)
}

/// The guild an edit should be reported to, when it should be reported at
/// all. Direct messages and bot authors are skipped, as are updates that
/// leave the content unchanged (embed unfurls and other metadata-only
/// gateway events).
fn edit_report_target(
    guild_id: Option<GuildId>,
    before: &Message,
    after: &Message,
) -> Option<GuildId> {
    guild_id.filter(|_| !before.author.bot && before.content != after.content)
}

/// Handles the message_delete event.
///
/// Only guild messages from non-bot authors are reported. The gateway does
/// not replay the deleted content, so the cached copy is the only source of
/// author and body; an uncached delete cannot be verified and is skipped.
pub async fn handle_message_delete(
    db: &DatabaseConnection,
    ctx: Context,
    channel_id: ChannelId,
    deleted_message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    // Clone out of the cache guard before any await point.
    let Some(message) = ctx
        .cache
        .message(channel_id, deleted_message_id)
        .map(|m| m.clone())
    else {
        tracing::debug!(
            "Deleted message {} not in cache, nothing to report",
            deleted_message_id
        );
        return;
    };

    let Some(guild_id) = delete_report_target(guild_id, &message) else {
        return;
    };

    let embed = notify::message_deleted_embed(guild_id, &message);
    notify::notify(db, &ctx, guild_id, LogCategory::Messages, embed).await;
}

/// Handles the message_update event.
///
/// Reports only genuine content edits in guilds by non-bot authors. Embed
/// unfurls and other metadata-only updates leave the content identical and
/// are ignored, as are edits whose before-state the cache never held.
pub async fn handle_message_update(
    db: &DatabaseConnection,
    ctx: Context,
    old_if_available: Option<Message>,
    new: Option<Message>,
    event: MessageUpdateEvent,
) {
    let (Some(before), Some(after)) = (old_if_available, new) else {
        tracing::debug!("Edit of message {} skipped without cached state", event.id);
        return;
    };

    let Some(guild_id) = edit_report_target(event.guild_id, &before, &after) else {
        return;
    };

    let embed = notify::message_edited_embed(guild_id, &before, &after);
    notify::notify(db, &ctx, guild_id, LogCategory::Messages, embed).await;
}
