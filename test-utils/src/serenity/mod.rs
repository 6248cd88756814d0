//! Test fixtures for creating Serenity API objects.
//!
//! These fixtures create valid Serenity structs by deserializing JSON,
//! simulating what Discord's API would return. Use them when testing code
//! that consumes Serenity models without a live gateway connection.

pub mod message;
pub mod user;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use message::create_test_message;
pub use user::create_test_user;
pub use voice_state::create_test_voice_state;
