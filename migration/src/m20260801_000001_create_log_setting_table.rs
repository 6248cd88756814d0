use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]

pub struct Migration;

#[async_trait::async_trait]

impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LogSetting::Table)
                    .if_not_exists()
                    .col(big_integer(LogSetting::GuildId))
                    .col(string_len(LogSetting::Category, 16))
                    .col(big_integer(LogSetting::ChannelId).default(0))
                    .col(boolean(LogSetting::Enabled).default(true))
                    .primary_key(
                        Index::create()
                            .col(LogSetting::GuildId)
                            .col(LogSetting::Category),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]

pub enum LogSetting {
    Table,
    GuildId,
    Category,
    ChannelId,
    Enabled,
}
