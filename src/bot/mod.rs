//! Discord bot integration for moderation audit logging.
//!
//! This module wires the bot to the Discord gateway and reacts to the events
//! the guild admins can subscribe to: member join/leave, message edits and
//! deletes, profile and role changes, and voice channel movement. Each event
//! handler reads the per-guild settings, builds an embed, and attempts a
//! best-effort delivery to the configured channel.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel state for the cache
//! - `GUILD_MEMBERS` - Member join/leave/update events (privileged intent)
//! - `GUILD_MESSAGES` - Message edit/delete events
//! - `GUILD_VOICE_STATES` - Voice channel movement
//! - `MESSAGE_CONTENT` - Message bodies for edit/delete logs (privileged intent)
//!
//! Privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod command;
pub mod handler;
pub mod notify;
pub mod profile;
pub mod start;
