use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelId, Context, CurrentUser, EventHandler, GuildId, GuildMemberUpdateEvent, Interaction,
    Member, Message, MessageId, MessageUpdateEvent, Ready, User, VoiceState,
};
use serenity::async_trait;

pub mod member;
pub mod message;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
}

impl Handler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called for slash command invocations
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        crate::bot::command::handle_interaction(&self.db, ctx, interaction).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.db, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            &self.db,
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }

    /// Called when a member is updated in a guild (roles, nickname, boost, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old_if_available: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(&self.db, ctx, old_if_available, new, event).await;
    }

    /// Called when the account's user profile is updated
    async fn user_update(&self, ctx: Context, old_data: Option<CurrentUser>, new: CurrentUser) {
        member::handle_user_update(&self.db, ctx, old_data, new).await;
    }

    /// Called when a message is deleted in a channel
    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete(&self.db, ctx, channel_id, deleted_message_id, guild_id)
            .await;
    }

    /// Called when a message is edited
    async fn message_update(
        &self,
        ctx: Context,
        old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        message::handle_message_update(&self.db, ctx, old_if_available, new, event).await;
    }

    /// Called when a member joins, leaves, or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(&self.db, ctx, old, new).await;
    }
}
