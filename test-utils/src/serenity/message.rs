//! Test fixture for creating Serenity Message objects.

use serenity::all::Message;

/// Creates a test Serenity Message with customizable fields.
///
/// Builds a Message by deserializing JSON with the provided values. The
/// author is embedded with the given id and bot flag; all other fields are
/// set to reasonable defaults.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `author_id` - Author's user ID
/// - `author_is_bot` - Whether the author is a bot account
/// - `content` - Message body
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    author_is_bot: bool,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": author_id.to_string(),
            "username": format!("user{author_id}"),
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": author_is_bot,
        },
        "content": content,
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "activity": null,
        "application": null,
        "application_id": null,
        "message_reference": null,
        "flags": null,
        "referenced_message": null,
        "interaction": null,
        "thread": null,
        "components": [],
        "sticker_items": [],
        "position": null,
        "role_subscription_data": null,
        "guild_id": null,
        "member": null,
        "nonce": null,
    }))
    .expect("valid message JSON")
}
