use super::*;

/// Tests that only the requested guild's events are returned, newest first.
///
/// Expected: Ok with two events in reverse creation order
#[tokio::test]
async fn returns_guild_events_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = GuildEventFactory::new(db, 42).name("Older").build().await?;
    let newer = GuildEventFactory::new(db, 42).name("Newer").build().await?;
    factory::create_guild_event(db, 43).await?;

    let repo = GuildEventRepository::new(db);
    let events = repo.get_by_guild(42, None).await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests filtering by lifecycle state.
///
/// Expected: Ok with only the active event
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildEventFactory::new(db, 42)
        .state(EventStatus::Created)
        .build()
        .await?;
    let active = GuildEventFactory::new(db, 42)
        .state(EventStatus::Active)
        .build()
        .await?;

    let repo = GuildEventRepository::new(db);
    let events = repo.get_by_guild(42, Some(EventStatus::Active)).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, active.id);

    Ok(())
}

/// Tests a guild without events.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_guild_without_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildEventRepository::new(db);

    assert!(repo.get_by_guild(42, None).await?.is_empty());

    Ok(())
}
