use super::*;

/// Tests creating a valid event.
///
/// Expected: Ok with the event in Created state
#[tokio::test]
async fn creates_valid_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildEventService::new(db);
    let event = service.create(raid_night()).await?;

    assert_eq!(event.name, "Raid Night");
    assert_eq!(event.maximum_participants, Some(20));
    assert_eq!(event.current_state, EventStatus::Created);
    assert_eq!(event.created_by, 7);

    Ok(())
}

/// Tests that name and description are trimmed and a blank description dropped.
///
/// Expected: Ok with trimmed name and no description
#[tokio::test]
async fn trims_name_and_drops_blank_description() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildEventService::new(db);
    let event = service
        .create(CreateGuildEventParams {
            name: "  Raid Night  ".to_string(),
            description: Some("   ".to_string()),
            ..raid_night()
        })
        .await?;

    assert_eq!(event.name, "Raid Night");
    assert_eq!(event.description, None);

    Ok(())
}

/// Tests the rejected inputs.
///
/// Each case must fail validation and leave no event behind.
///
/// Expected: Err(AppError::Validation) for every case
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cases = vec![
        (
            CreateGuildEventParams {
                name: "".to_string(),
                ..raid_night()
            },
            "Event name is required.".to_string(),
        ),
        (
            CreateGuildEventParams {
                name: " \t ".to_string(),
                ..raid_night()
            },
            "Event name is required.".to_string(),
        ),
        (
            CreateGuildEventParams {
                minimum_participant_minutes: Some(-1),
                ..raid_night()
            },
            "Minimum participation cannot be negative.".to_string(),
        ),
        (
            CreateGuildEventParams {
                maximum_participants: Some(0),
                ..raid_night()
            },
            "Maximum participants must be at least 1.".to_string(),
        ),
        (
            CreateGuildEventParams {
                name: "x".repeat(257),
                ..raid_night()
            },
            "Event name cannot be longer than 256 characters.".to_string(),
        ),
        (
            CreateGuildEventParams {
                description: Some("x".repeat(2049)),
                ..raid_night()
            },
            "Event description cannot be longer than 2048 characters.".to_string(),
        ),
    ];

    let service = GuildEventService::new(db);
    for (params, message) in cases {
        let err = service.create(params).await.unwrap_err();

        assert_eq!(err.status(), OperationStatus::ValidationError);
        assert_eq!(err.user_message(), message);
    }

    assert!(service.list_for_guild(42, None).await?.is_empty());

    Ok(())
}

/// Tests the boundary values that are still accepted.
///
/// Expected: Ok for zero minimum minutes, a cap of 1 and maximum lengths
#[tokio::test]
async fn accepts_boundary_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildEventService::new(db);
    let event = service
        .create(CreateGuildEventParams {
            name: "x".repeat(256),
            description: Some("y".repeat(2048)),
            minimum_participant_minutes: Some(0),
            maximum_participants: Some(1),
            ..raid_night()
        })
        .await?;

    assert_eq!(event.minimum_participant_minutes, Some(0));
    assert_eq!(event.maximum_participants, Some(1));

    Ok(())
}
