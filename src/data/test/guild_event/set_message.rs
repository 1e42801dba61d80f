use super::*;

/// Tests recording the display message of an event.
///
/// Expected: Ok(true) and both ids stored
#[tokio::test]
async fn stores_channel_and_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_guild_event(db, 42).await?;

    let repo = GuildEventRepository::new(db);
    assert!(repo.set_message(created.id, 500, 600).await?);

    let event = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(event.origin_channel_id, Some(500));
    assert_eq!(event.message_id, Some(600));
    assert_eq!(event.published_at(), Some((500, 600)));

    Ok(())
}

/// Tests recording a message for a missing event.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildEventRepository::new(db);

    assert!(!repo.set_message(999, 500, 600).await?);

    Ok(())
}
