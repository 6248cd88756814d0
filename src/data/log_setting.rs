use entity::prelude::LogCategory;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository for per-guild log channel configuration.
///
/// One row per (guild, category) pair; see `entity::log_setting`. Writes are
/// rare and admin-driven, so every operation is a single statement on the
/// shared connection pool.
pub struct LogSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Point lookup of the configuration row for one guild and category.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Row found
    /// - `Ok(None)`: Category never configured for this guild
    /// - `Err(DbErr)`: Database error during query
    pub async fn find(
        &self,
        guild_id: u64,
        category: LogCategory,
    ) -> Result<Option<entity::log_setting::Model>, DbErr> {
        entity::prelude::LogSetting::find()
            .filter(entity::log_setting::Column::GuildId.eq(guild_id as i64))
            .filter(entity::log_setting::Column::Category.eq(category))
            .one(self.db)
            .await
    }

    /// Inserts or overwrites the configuration row for (guild, category).
    ///
    /// Both value columns are replaced atomically in one statement, preserving
    /// the at-most-one-row-per-key invariant.
    pub async fn upsert(
        &self,
        guild_id: u64,
        category: LogCategory,
        channel_id: u64,
        enabled: bool,
    ) -> Result<entity::log_setting::Model, DbErr> {
        entity::prelude::LogSetting::insert(entity::log_setting::ActiveModel {
            guild_id: ActiveValue::Set(guild_id as i64),
            category: ActiveValue::Set(category),
            channel_id: ActiveValue::Set(channel_id as i64),
            enabled: ActiveValue::Set(enabled),
        })
        .on_conflict(
            OnConflict::columns([
                entity::log_setting::Column::GuildId,
                entity::log_setting::Column::Category,
            ])
            .update_columns([
                entity::log_setting::Column::ChannelId,
                entity::log_setting::Column::Enabled,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
