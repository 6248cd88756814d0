//! Test fixture for creating Serenity User objects.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// Builds a User by deserializing JSON with the provided values, the same way
/// Discord's API would deliver it. The avatar hash is padded to 32 characters
/// (Discord's image hash format) when a shorter value is given.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account username
/// - `global_name` - Optional global display name
/// - `avatar` - Optional avatar hash (padded to 32 characters if shorter)
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (invalid test data)
pub fn create_test_user(
    user_id: u64,
    username: &str,
    global_name: Option<&str>,
    avatar: Option<&str>,
) -> User {
    let formatted_avatar = avatar.map(|hash| {
        if hash.len() < 32 {
            format!("{:0<32}", hash)
        } else {
            hash.to_string()
        }
    });

    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0",
        "global_name": global_name,
        "avatar": formatted_avatar,
        "bot": false,
        "system": false,
        "mfa_enabled": false,
        "banner": null,
        "accent_color": null,
        "locale": null,
        "verified": null,
        "email": null,
        "flags": 0,
        "premium_type": 0,
        "public_flags": null,
        "member": null,
    }))
    .expect("valid user JSON")
}
