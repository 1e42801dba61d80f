use super::*;

/// Tests each setter against the field it writes.
///
/// Expected: Ok with all four fields stored on one row
#[tokio::test]
async fn setters_write_their_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = new_cache();

    let service = GuildSettingsService::new(db, &cache);
    service.set_loot_channel(42, Some(1)).await?;
    service.set_event_channel(42, Some(2)).await?;
    service.set_organizer_role(42, Some(3)).await?;
    let settings = service.set_participant_role(42, Some(4)).await?;

    assert_eq!(settings.loot_channel_id, Some(1));
    assert_eq!(settings.event_channel_id, Some(2));
    assert_eq!(settings.event_organizer_role_id, Some(3));
    assert_eq!(settings.event_participant_role_id, Some(4));
    assert_eq!(service.get(42).await?, settings);

    Ok(())
}

/// Tests clearing a previously set value.
///
/// Expected: Ok with the field unset
#[tokio::test]
async fn clears_value() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = new_cache();

    GuildSettingsFactory::new(db)
        .guild_id(42)
        .loot_channel(Some(100))
        .build()
        .await?;

    let service = GuildSettingsService::new(db, &cache);
    let settings = service.set_loot_channel(42, None).await?;

    assert_eq!(settings.loot_channel_id, None);

    Ok(())
}

/// Tests that a write evicts the guild's cached settings.
///
/// Expected: cache entry gone for the written guild, untouched for others
#[tokio::test]
async fn write_invalidates_cache_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = new_cache();

    cache.insert(GuildSettings::unconfigured(42));
    cache.insert(GuildSettings::unconfigured(43));

    let service = GuildSettingsService::new(db, &cache);
    service.set_event_channel(42, Some(123)).await?;

    assert!(cache.get(42).is_none());
    assert!(cache.get(43).is_some());

    Ok(())
}

/// Tests that a write does not pre-populate the cache.
///
/// Expected: cache stays empty after the write
#[tokio::test]
async fn write_does_not_populate_cache() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = new_cache();

    let service = GuildSettingsService::new(db, &cache);
    service.set_organizer_role(42, Some(300)).await?;

    assert!(cache.is_empty());

    Ok(())
}

/// Tests that a failed write leaves the cache untouched.
///
/// The settings table is never created, so the upsert fails.
///
/// Expected: Err(AppError::DbErr) and the cached entry still present
#[tokio::test]
async fn failed_write_keeps_cache_entry() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = new_cache();

    cache.insert(GuildSettings::unconfigured(42));

    let service = GuildSettingsService::new(db, &cache);
    let result = service.set_event_channel(42, Some(123)).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert!(cache.get(42).is_some());

    Ok(())
}

/// Tests that a role check after a settings write sees the new value.
///
/// The old value is cached by a first check; the write must evict it.
///
/// Expected: the member holding only the old role is denied afterwards
#[tokio::test]
async fn role_check_sees_write_after_cached_read() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = new_cache();

    let service = GuildSettingsService::new(db, &cache);
    let guard = RoleGuard::new(db, &cache);

    service.set_organizer_role(42, Some(300)).await?;
    let before = guard
        .check(Some(42), &[300], RoleRequirement::EventOrganizer)
        .await?;
    assert_eq!(before, RoleCheck::Allowed);
    assert!(cache.get(42).is_some());

    service.set_organizer_role(42, Some(301)).await?;
    let after = guard
        .check(Some(42), &[300], RoleRequirement::EventOrganizer)
        .await?;

    assert!(matches!(after, RoleCheck::Denied(_)));
    assert_eq!(cache.get(42).unwrap().event_organizer_role_id, Some(301));

    Ok(())
}

/// Tests the event channel read-after-write through both the cache and `get`.
///
/// Expected: both reads reflect 123
#[tokio::test]
async fn event_channel_write_is_visible_everywhere() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = new_cache();

    GuildSettingsFactory::new(db)
        .guild_id(42)
        .event_channel(Some(5))
        .build()
        .await?;

    let guard = RoleGuard::new(db, &cache);
    guard
        .check(Some(42), &[], RoleRequirement::EventOrganizer)
        .await?;
    assert_eq!(cache.get(42).unwrap().event_channel_id, Some(5));

    let service = GuildSettingsService::new(db, &cache);
    service.set_event_channel(42, Some(123)).await?;

    assert_eq!(service.get(42).await?.event_channel_id, Some(123));
    guard
        .check(Some(42), &[], RoleRequirement::EventOrganizer)
        .await?;
    assert_eq!(cache.get(42).unwrap().event_channel_id, Some(123));

    Ok(())
}
