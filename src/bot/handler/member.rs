use entity::prelude::LogCategory;
use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, CurrentUser, GuildId, GuildMemberUpdateEvent, Member, Mentionable, User,
};

use crate::bot::{
    notify,
    profile::{diff_profiles, Profile},
};

/// Handles the guild_member_addition event when a member joins a guild.
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    ctx: Context,
    new_member: Member,
) {
    let embed = notify::traffic_embed(
        "Member Joined",
        notify::GREEN,
        &new_member.mention().to_string(),
        Member::display_name(&new_member),
        &new_member.face(),
    );

    notify::notify(db, &ctx, new_member.guild_id, LogCategory::Traffic, embed).await;
}

/// Handles the guild_member_removal event when a member leaves a guild.
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    let embed = notify::traffic_embed(
        "Member Left",
        notify::RED,
        &user.mention().to_string(),
        User::display_name(&user),
        &user.face(),
    );

    notify::notify(db, &ctx, guild_id, LogCategory::Traffic, embed).await;
}

/// Handles the guild_member_update event (nickname, roles, avatar, boost).
///
/// Runs the profile diff against the cached before-state and sends one
/// notification per detected change, all targeting this one guild. Without a
/// cached before-state there is nothing to compare against.
pub async fn handle_guild_member_update(
    db: &DatabaseConnection,
    ctx: Context,
    old_if_available: Option<Member>,
    new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let (Some(before), Some(after)) = (old_if_available, new) else {
        tracing::debug!(
            "Member update for {} in guild {} skipped without cached state",
            event.user.id,
            event.guild_id
        );
        return;
    };

    send_profile_changes(db, &ctx, &before, &after, &[after.guild_id]).await;
}

/// Handles the user_update event for account-level profile changes.
///
/// Account-level changes are not tied to one guild, so every guild the cache
/// reports as shared with the account gets the notification (skipping guilds
/// with no configured destination).
pub async fn handle_user_update(
    db: &DatabaseConnection,
    ctx: Context,
    old_data: Option<CurrentUser>,
    new: CurrentUser,
) {
    let Some(before) = old_data else {
        tracing::debug!("User update for {} skipped without cached state", new.id);
        return;
    };

    let user_id = new.id;
    let mutual_guilds: Vec<GuildId> = ctx
        .cache
        .guilds()
        .into_iter()
        .filter(|guild_id| {
            ctx.cache
                .guild(*guild_id)
                .is_some_and(|guild| guild.members.contains_key(&user_id))
        })
        .collect();

    send_profile_changes(db, &ctx, &*before, &*new, &mutual_guilds).await;
}

/// Shared tail of both profile-update handlers: diff, format, broadcast.
async fn send_profile_changes<P: Profile>(
    db: &DatabaseConnection,
    ctx: &Context,
    before: &P,
    after: &P,
    guild_ids: &[GuildId],
) {
    let changes = diff_profiles(before, after);
    if changes.is_empty() {
        return;
    }

    let mention = after.user_id().mention().to_string();
    let display_name = after.display_name();

    for change in &changes {
        tracing::debug!(
            "Profile change for {}: {:?} (targets: {:?})",
            after.user_id(),
            change,
            guild_ids
        );

        let (category, embed) = notify::profile_change_message(change, &mention, &display_name);
        notify::broadcast(db, ctx, guild_ids, category, embed).await;
    }
}
