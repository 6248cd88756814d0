//! Log setting factory for creating test configuration rows.

use crate::factory::helpers::next_id;
use entity::prelude::LogCategory;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test log settings with customizable fields.
///
/// Provides a builder pattern for creating log setting rows with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::log_setting::LogSettingFactory;
///
/// let setting = LogSettingFactory::new(&db)
///     .guild_id(42)
///     .category(LogCategory::Messages)
///     .channel_id(1001)
///     .build()
///     .await?;
/// ```
pub struct LogSettingFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    category: LogCategory,
    channel_id: i64,
    enabled: bool,
}

impl<'a> LogSettingFactory<'a> {
    /// Creates a new LogSettingFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented unique id
    /// - category: `LogCategory::Messages`
    /// - channel_id: auto-incremented unique id
    /// - enabled: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id() as i64,
            category: LogCategory::Messages,
            channel_id: next_id() as i64,
            enabled: true,
        }
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn category(mut self, category: LogCategory) -> Self {
        self.category = category;
        self
    }

    pub fn channel_id(mut self, channel_id: i64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builds and inserts the log setting row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::log_setting::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::log_setting::Model, DbErr> {
        entity::log_setting::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            category: ActiveValue::Set(self.category),
            channel_id: ActiveValue::Set(self.channel_id),
            enabled: ActiveValue::Set(self.enabled),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a log setting with default values.
///
/// Shorthand for `LogSettingFactory::new(db).build().await`.
pub async fn create_log_setting(
    db: &DatabaseConnection,
) -> Result<entity::log_setting::Model, DbErr> {
    LogSettingFactory::new(db).build().await
}
