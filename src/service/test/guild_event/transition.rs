use super::*;

/// Tests every transition from every state against the lifecycle table.
///
/// Allowed moves must land in the target state; every other move must fail with
/// InvalidState and leave the stored state unchanged.
///
/// Expected: outcome matches `EventTransition::is_allowed_from` for all pairs
#[tokio::test]
async fn follows_lifecycle_table() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = GuildEventService::new(db);

    for state in EventStatus::iter() {
        for transition in EventTransition::ALL {
            let created = GuildEventFactory::new(db, 42).state(state).build().await?;

            let result = service.transition(created.id, transition, 7).await;
            let stored = service.get_in_guild(42, created.id).await?;

            if transition.is_allowed_from(state) {
                let event = result?;
                assert_eq!(event.current_state, transition.target());
                assert_eq!(stored.current_state, transition.target());
            } else {
                let err = result.unwrap_err();
                assert_eq!(err.status(), OperationStatus::InvalidState);
                assert_eq!(
                    err.user_message(),
                    format!(
                        "Cannot change event from {} to {}.",
                        state,
                        transition.target()
                    )
                );
                assert_eq!(stored.current_state, state);
            }
        }
    }

    Ok(())
}

/// Tests that cancel succeeds from every state except Cancelled.
///
/// Expected: Ok from Created, Active, Paused and Completed
#[tokio::test]
async fn cancel_from_every_live_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = GuildEventService::new(db);

    for state in [
        EventStatus::Created,
        EventStatus::Active,
        EventStatus::Paused,
        EventStatus::Completed,
    ] {
        let created = GuildEventFactory::new(db, 42).state(state).build().await?;

        let event = service.cancel(created.id, 7).await?;

        assert_eq!(event.current_state, EventStatus::Cancelled);
    }

    let cancelled = GuildEventFactory::new(db, 42)
        .state(EventStatus::Cancelled)
        .build()
        .await?;
    let err = service.cancel(cancelled.id, 7).await.unwrap_err();
    assert_eq!(err.status(), OperationStatus::InvalidState);

    Ok(())
}

/// Tests start and complete audit stamps.
///
/// Expected: start sets started_by, complete sets completed_by, pause sets neither
#[tokio::test]
async fn stamps_start_and_complete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = GuildEventService::new(db);

    let created = factory::create_guild_event(db, 42).await?;

    let started = service.start(created.id, 11).await?;
    assert_eq!(started.started_by, Some(11));
    assert!(started.started_at.is_some());
    assert_eq!(started.completed_at, None);

    let paused = service.pause(created.id, 12).await?;
    assert_eq!(paused.started_by, Some(11));

    service.resume(created.id, 13).await?;
    service.complete(created.id, 14).await?;

    let stored = service.get_in_guild(42, created.id).await?;
    assert_eq!(stored.started_by, Some(11));
    assert_eq!(stored.completed_by, Some(14));
    assert!(stored.completed_at.is_some());
    assert!(stored.completed_at >= stored.started_at);

    Ok(())
}

/// Tests transitioning an event that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = GuildEventService::new(db);

    let err = service.start(999, 7).await.unwrap_err();

    assert_eq!(err.status(), OperationStatus::NotFound);
    assert_eq!(err.user_message(), "Event not found.");

    Ok(())
}

/// Tests that an event is hidden from other guilds.
///
/// Expected: Err(AppError::NotFound) when read through another guild
#[tokio::test]
async fn get_in_guild_hides_other_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = GuildEventService::new(db);

    let created = factory::create_guild_event(db, 42).await?;

    assert!(service.get_in_guild(42, created.id).await.is_ok());
    let err = service.get_in_guild(43, created.id).await.unwrap_err();
    assert_eq!(err.status(), OperationStatus::NotFound);

    Ok(())
}
