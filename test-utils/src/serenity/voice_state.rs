//! Test fixture for creating Serenity VoiceState objects.

use serenity::all::VoiceState;

/// Creates a test Serenity VoiceState with customizable fields.
///
/// Builds a VoiceState by deserializing JSON with the provided values.
/// Mute/deafen flags default to false and the member payload is omitted.
///
/// # Arguments
/// - `user_id` - The user the voice state belongs to
/// - `guild_id` - Guild the state was observed in, if any
/// - `channel_id` - Voice channel the user occupies, `None` when disconnected
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (invalid test data)
pub fn create_test_voice_state(
    user_id: u64,
    guild_id: Option<u64>,
    channel_id: Option<u64>,
) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "channel_id": channel_id.map(|id| id.to_string()),
        "deaf": false,
        "guild_id": guild_id.map(|id| id.to_string()),
        "member": null,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": null,
        "self_video": false,
        "session_id": "test-session",
        "suppress": false,
        "user_id": user_id.to_string(),
        "request_to_speak_timestamp": null,
    }))
    .expect("valid voice state JSON")
}
