use super::*;

/// Tests listing a guild's events with and without a state filter.
///
/// Expected: newest first, filtered to Paused when requested
#[tokio::test]
async fn lists_newest_first_with_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = GuildEventService::new(db);

    let first = service.create(raid_night()).await?;
    let second = service
        .create(CreateGuildEventParams {
            name: "Mining Op".to_string(),
            ..raid_night()
        })
        .await?;
    service.start(second.id, 7).await?;
    service.pause(second.id, 7).await?;
    factory::create_guild_event(db, 43).await?;

    let all = service.list_for_guild(42, None).await?;
    let ids: Vec<i32> = all.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let paused = service
        .list_for_guild(42, Some(EventStatus::Paused))
        .await?;
    assert_eq!(paused.len(), 1);
    assert_eq!(paused[0].name, "Mining Op");

    Ok(())
}
