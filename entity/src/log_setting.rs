//! Per-guild log channel configuration.
//!
//! One row per (guild, category) pair. A `channel_id` of 0 means no
//! destination has been configured yet; `enabled` defaults to true so that
//! pointing a category at a channel is enough to start receiving logs.

use sea_orm::entity::prelude::*;

/// The closed set of notification categories a guild can configure.
///
/// Stored as a plain string in the database so rows stay readable with
/// ad-hoc SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum LogCategory {
    #[sea_orm(string_value = "messages")]
    Messages,
    #[sea_orm(string_value = "members")]
    Members,
    #[sea_orm(string_value = "roles")]
    Roles,
    #[sea_orm(string_value = "voice")]
    Voice,
    #[sea_orm(string_value = "nitro")]
    Nitro,
    #[sea_orm(string_value = "traffic")]
    Traffic,
}

impl LogCategory {
    /// All categories, in the order they appear in the `/logs` command choices.
    pub const ALL: [LogCategory; 6] = [
        LogCategory::Messages,
        LogCategory::Members,
        LogCategory::Roles,
        LogCategory::Voice,
        LogCategory::Nitro,
        LogCategory::Traffic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Messages => "messages",
            LogCategory::Members => "members",
            LogCategory::Roles => "roles",
            LogCategory::Voice => "voice",
            LogCategory::Nitro => "nitro",
            LogCategory::Traffic => "traffic",
        }
    }

    /// Parses a command option value back into a category.
    pub fn from_str(value: &str) -> Option<Self> {
        LogCategory::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "log_setting")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub category: LogCategory,
    pub channel_id: i64,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
