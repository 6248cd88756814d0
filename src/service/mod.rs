//! Service layer for business logic.
//!
//! Services sit between the bot (event/command) layer and the data
//! (repository) layer. They implement the configuration merge rules and
//! destination resolution that the handlers rely on, working with entity
//! models rather than raw Discord payloads.

pub mod log_setting;

pub use log_setting::LogSettingService;
