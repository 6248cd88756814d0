use entity::prelude::LogCategory;
use sea_orm::{DatabaseConnection, DbErr};
use serenity::all::ChannelId;

use crate::data::LogSettingRepository;

/// Result of a `/logs` configuration call.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigureOutcome {
    /// No parameters were supplied; nothing was written. Carries the current
    /// effective settings (defaults when no row exists).
    Report { channel_id: u64, enabled: bool },
    /// Supplied values were merged over the stored row and persisted.
    Updated { channel_id: u64, enabled: bool },
}

/// Business rules for log channel configuration and lookup.
pub struct LogSettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogSettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a `/logs` command invocation for one guild and category.
    ///
    /// With no optional parameters this is a read-only report of the current
    /// settings. Otherwise the supplied values are merged over the stored row:
    /// an unsupplied field keeps its prior value, and when no row exists yet
    /// the channel defaults to unset (0) and the enabled flag to true. The
    /// merged row replaces the stored one in a single upsert.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command was invoked in
    /// - `category` - Category being configured
    /// - `channel` - New destination channel, if supplied
    /// - `enabled` - New enabled flag, if supplied
    ///
    /// # Returns
    /// - `Ok(ConfigureOutcome)` - Report or the persisted merged state
    /// - `Err(DbErr)` - Database error; nothing was partially applied
    pub async fn configure(
        &self,
        guild_id: u64,
        category: LogCategory,
        channel: Option<u64>,
        enabled: Option<bool>,
    ) -> Result<ConfigureOutcome, DbErr> {
        let repo = LogSettingRepository::new(self.db);
        let existing = repo.find(guild_id, category).await?;

        let old_channel = existing.as_ref().map(|r| r.channel_id as u64).unwrap_or(0);
        let old_enabled = existing.as_ref().map(|r| r.enabled).unwrap_or(true);

        if channel.is_none() && enabled.is_none() {
            return Ok(ConfigureOutcome::Report {
                channel_id: old_channel,
                enabled: old_enabled,
            });
        }

        let new_channel = channel.unwrap_or(old_channel);
        let new_enabled = enabled.unwrap_or(old_enabled);

        let row = repo
            .upsert(guild_id, category, new_channel, new_enabled)
            .await?;

        Ok(ConfigureOutcome::Updated {
            channel_id: row.channel_id as u64,
            enabled: row.enabled,
        })
    }

    /// Resolves the destination channel for a category's notifications.
    ///
    /// Returns a channel only when a row exists, the category is enabled, a
    /// destination has actually been configured, and the `is_live` lookup
    /// (backed by the gateway cache at call sites) confirms the channel still
    /// exists. Everything else means "no destination" and the caller sends
    /// nothing.
    pub async fn resolve_destination(
        &self,
        guild_id: u64,
        category: LogCategory,
        is_live: impl Fn(ChannelId) -> bool,
    ) -> Result<Option<ChannelId>, DbErr> {
        let Some(row) = LogSettingRepository::new(self.db)
            .find(guild_id, category)
            .await?
        else {
            return Ok(None);
        };

        if !row.enabled || row.channel_id == 0 {
            return Ok(None);
        }

        let channel = ChannelId::new(row.channel_id as u64);
        Ok(is_live(channel).then_some(channel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::prelude::LogSetting;
    use test_utils::{builder::TestBuilder, factory};

    /// A partial update supplying only the channel keeps the stored enabled
    /// flag, and vice versa.
    #[tokio::test]
    async fn partial_update_preserves_other_field() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(LogSetting)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::log_setting::LogSettingFactory::new(db)
            .guild_id(42)
            .category(LogCategory::Messages)
            .channel_id(1001)
            .enabled(false)
            .build()
            .await?;

        let service = LogSettingService::new(db);

        // Only the channel changes; enabled stays false.
        let outcome = service
            .configure(42, LogCategory::Messages, Some(2002), None)
            .await?;
        assert_eq!(
            outcome,
            ConfigureOutcome::Updated {
                channel_id: 2002,
                enabled: false
            }
        );

        // Only the flag changes; the channel stays at 2002.
        let outcome = service
            .configure(42, LogCategory::Messages, None, Some(true))
            .await?;
        assert_eq!(
            outcome,
            ConfigureOutcome::Updated {
                channel_id: 2002,
                enabled: true
            }
        );

        Ok(())
    }

    /// Configuring a channel for a category with no prior row leaves the
    /// enabled flag at its default of true.
    #[tokio::test]
    async fn first_write_defaults_enabled_to_true() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(LogSetting)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = LogSettingService::new(db);
        let outcome = service
            .configure(42, LogCategory::Messages, Some(1001), None)
            .await?;

        assert_eq!(
            outcome,
            ConfigureOutcome::Updated {
                channel_id: 1001,
                enabled: true
            }
        );

        Ok(())
    }

    /// With no parameters the call reports and writes nothing.
    #[tokio::test]
    async fn report_performs_no_write() -> Result<(), DbErr> {
        use sea_orm::{EntityTrait, PaginatorTrait};

        let test = TestBuilder::new()
            .with_table(LogSetting)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = LogSettingService::new(db);
        let outcome = service
            .configure(42, LogCategory::Nitro, None, None)
            .await?;

        // Defaults for a guild that never configured the category.
        assert_eq!(
            outcome,
            ConfigureOutcome::Report {
                channel_id: 0,
                enabled: true
            }
        );

        let count = entity::prelude::LogSetting::find().count(db).await?;
        assert_eq!(count, 0);

        Ok(())
    }

    /// Report reflects the stored row once one exists.
    #[tokio::test]
    async fn report_returns_stored_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(LogSetting)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::log_setting::LogSettingFactory::new(db)
            .guild_id(42)
            .category(LogCategory::Voice)
            .channel_id(1001)
            .enabled(false)
            .build()
            .await?;

        let service = LogSettingService::new(db);
        let outcome = service
            .configure(42, LogCategory::Voice, None, None)
            .await?;

        assert_eq!(
            outcome,
            ConfigureOutcome::Report {
                channel_id: 1001,
                enabled: false
            }
        );

        Ok(())
    }

    /// No destination is resolved for a missing row, a disabled category, an
    /// unset channel, or a channel the runtime no longer knows about.
    #[tokio::test]
    async fn resolve_destination_gates_every_condition() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(LogSetting)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = LogSettingService::new(db);

        // No row at all.
        let dest = service
            .resolve_destination(42, LogCategory::Traffic, |_| true)
            .await?;
        assert!(dest.is_none());

        // Row exists but the category is disabled.
        factory::log_setting::LogSettingFactory::new(db)
            .guild_id(42)
            .category(LogCategory::Traffic)
            .channel_id(1001)
            .enabled(false)
            .build()
            .await?;
        let dest = service
            .resolve_destination(42, LogCategory::Traffic, |_| true)
            .await?;
        assert!(dest.is_none());

        // Enabled but no channel was ever set.
        factory::log_setting::LogSettingFactory::new(db)
            .guild_id(42)
            .category(LogCategory::Members)
            .channel_id(0)
            .enabled(true)
            .build()
            .await?;
        let dest = service
            .resolve_destination(42, LogCategory::Members, |_| true)
            .await?;
        assert!(dest.is_none());

        // Fully configured but the channel no longer resolves live.
        factory::log_setting::LogSettingFactory::new(db)
            .guild_id(42)
            .category(LogCategory::Voice)
            .channel_id(1001)
            .enabled(true)
            .build()
            .await?;
        let dest = service
            .resolve_destination(42, LogCategory::Voice, |_| false)
            .await?;
        assert!(dest.is_none());

        Ok(())
    }

    /// A configured, enabled row with a live channel resolves to that channel.
    #[tokio::test]
    async fn resolve_destination_returns_live_channel() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(LogSetting)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::log_setting::LogSettingFactory::new(db)
            .guild_id(42)
            .category(LogCategory::Messages)
            .channel_id(1001)
            .enabled(true)
            .build()
            .await?;

        let service = LogSettingService::new(db);
        let dest = service
            .resolve_destination(42, LogCategory::Messages, |_| true)
            .await?;

        assert_eq!(dest, Some(ChannelId::new(1001)));

        Ok(())
    }

    /// Mirrors the cross-guild broadcast rule: of two guilds, only the one
    /// with an enabled destination resolves to a delivery target.
    #[tokio::test]
    async fn only_configured_guild_resolves_for_broadcast() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(LogSetting)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::log_setting::LogSettingFactory::new(db)
            .guild_id(1)
            .category(LogCategory::Members)
            .channel_id(1001)
            .enabled(true)
            .build()
            .await?;

        let service = LogSettingService::new(db);

        let mut targets = Vec::new();
        for guild_id in [1u64, 2u64] {
            if let Some(channel) = service
                .resolve_destination(guild_id, LogCategory::Members, |_| true)
                .await?
            {
                targets.push(channel);
            }
        }

        assert_eq!(targets, vec![ChannelId::new(1001)]);

        Ok(())
    }
}
