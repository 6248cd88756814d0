use super::*;

/// Tests finding an existing configuration row.
///
/// Expected: Ok with the stored channel and enabled flag
#[tokio::test]
async fn finds_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(LogSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::log_setting::LogSettingFactory::new(db)
        .guild_id(42)
        .category(LogCategory::Traffic)
        .channel_id(1001)
        .enabled(false)
        .build()
        .await?;

    let repo = LogSettingRepository::new(db);
    let found = repo.find(42, LogCategory::Traffic).await?;

    let row = found.expect("row should exist");
    assert_eq!(row.channel_id, 1001);
    assert!(!row.enabled);

    Ok(())
}

/// Tests finding a category that was never configured.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(LogSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogSettingRepository::new(db);
    let found = repo.find(42, LogCategory::Messages).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that lookups are scoped to both key columns.
///
/// A row for one (guild, category) pair must not be returned for a different
/// guild or a different category.
///
/// Expected: Ok(None) for both mismatched lookups
#[tokio::test]
async fn lookup_is_scoped_to_guild_and_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(LogSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::log_setting::LogSettingFactory::new(db)
        .guild_id(42)
        .category(LogCategory::Voice)
        .build()
        .await?;

    let repo = LogSettingRepository::new(db);

    assert!(repo.find(43, LogCategory::Voice).await?.is_none());
    assert!(repo.find(42, LogCategory::Members).await?.is_none());
    assert!(repo.find(42, LogCategory::Voice).await?.is_some());

    Ok(())
}
