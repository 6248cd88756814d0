use entity::prelude::LogCategory;
use sea_orm::DatabaseConnection;
use serenity::all::{ChannelId, Context, Mentionable, VoiceState};

use crate::bot::notify;

/// Channel transition carried by a voice state pair, if any. `None` when the
/// channel is unchanged, which covers mute/deafen and other in-place toggles.
fn channel_transition(
    old: Option<&VoiceState>,
    new: &VoiceState,
) -> Option<(Option<ChannelId>, Option<ChannelId>)> {
    let before = old.and_then(|state| state.channel_id);
    let after = new.channel_id;
    (before != after).then_some((before, after))
}

/// Handles the voice_state_update event.
///
/// Only channel membership changes are reported: joining, leaving, or moving
/// between voice channels.
pub async fn handle_voice_state_update(
    db: &DatabaseConnection,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };

    let Some((before, after)) = channel_transition(old.as_ref(), &new) else {
        return;
    };

    let mention = new
        .member
        .as_ref()
        .map(|member| member.mention().to_string())
        .unwrap_or_else(|| new.user_id.mention().to_string());

    let embed = notify::voice_embed(&mention, before, after);
    notify::notify(db, &ctx, guild_id, LogCategory::Voice, embed).await;
}

#[cfg(test)]
mod tests {
    use test_utils::serenity::create_test_voice_state;

    use super::*;

    #[test]
    fn unchanged_channel_is_not_a_transition() {
        let old = create_test_voice_state(1, Some(10), Some(500));
        let new = create_test_voice_state(1, Some(10), Some(500));

        assert_eq!(channel_transition(Some(&old), &new), None);
    }

    #[test]
    fn joining_a_channel_is_a_transition() {
        let new = create_test_voice_state(1, Some(10), Some(500));

        assert_eq!(
            channel_transition(None, &new),
            Some((None, Some(ChannelId::new(500))))
        );
    }

    #[test]
    fn moving_between_channels_is_a_transition() {
        let old = create_test_voice_state(1, Some(10), Some(500));
        let new = create_test_voice_state(1, Some(10), Some(501));

        assert_eq!(
            channel_transition(Some(&old), &new),
            Some((Some(ChannelId::new(500)), Some(ChannelId::new(501))))
        );
    }

    #[test]
    fn leaving_voice_is_a_transition() {
        let old = create_test_voice_state(1, Some(10), Some(500));
        let new = create_test_voice_state(1, Some(10), None);

        assert_eq!(
            channel_transition(Some(&old), &new),
            Some((Some(ChannelId::new(500)), None))
        );
    }
}
