use super::*;

/// Tests that upsert followed by find returns exactly the values written.
///
/// Expected: Ok with round-tripped channel and enabled flag
#[tokio::test]
async fn upsert_then_find_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(LogSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogSettingRepository::new(db);
    repo.upsert(42, LogCategory::Messages, 1001, true).await?;

    let row = repo.find(42, LogCategory::Messages).await?.unwrap();
    assert_eq!(row.guild_id, 42);
    assert_eq!(row.category, LogCategory::Messages);
    assert_eq!(row.channel_id, 1001);
    assert!(row.enabled);

    Ok(())
}

/// Tests that upserting an existing key overwrites both value columns
/// without creating a duplicate row.
///
/// Expected: Ok with one row holding the new values
#[tokio::test]
async fn overwrites_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(LogSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::log_setting::LogSettingFactory::new(db)
        .guild_id(42)
        .category(LogCategory::Roles)
        .channel_id(1001)
        .enabled(true)
        .build()
        .await?;

    let repo = LogSettingRepository::new(db);
    let updated = repo.upsert(42, LogCategory::Roles, 2002, false).await?;

    assert_eq!(updated.channel_id, 2002);
    assert!(!updated.enabled);

    let count = LogSetting::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the same guild can configure every category independently.
///
/// Expected: Ok with six distinct rows
#[tokio::test]
async fn categories_do_not_collide() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(LogSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogSettingRepository::new(db);
    for (i, category) in LogCategory::ALL.into_iter().enumerate() {
        repo.upsert(42, category, 1000 + i as u64, true).await?;
    }

    let count = LogSetting::find().count(db).await?;
    assert_eq!(count, 6);

    let voice = repo.find(42, LogCategory::Voice).await?.unwrap();
    assert_eq!(voice.channel_id, 1003);

    Ok(())
}

/// Tests that snowflake-sized identifiers survive the i64 column round trip.
///
/// Expected: Ok with the original ids returned
#[tokio::test]
async fn stores_snowflake_sized_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(LogSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild_id: u64 = 1146744073709551615;
    let channel_id: u64 = 1146744073709551616;

    let repo = LogSettingRepository::new(db);
    repo.upsert(guild_id, LogCategory::Traffic, channel_id, true)
        .await?;

    let row = repo.find(guild_id, LogCategory::Traffic).await?.unwrap();
    assert_eq!(row.channel_id as u64, channel_id);

    Ok(())
}
