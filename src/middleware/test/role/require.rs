use super::*;

/// Tests that an allowed check passes through.
///
/// Expected: Ok(())
#[tokio::test]
async fn passes_allowed_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = new_cache();

    GuildSettingsFactory::new(db)
        .guild_id(42)
        .organizer_role(Some(300))
        .build()
        .await?;

    let guard = RoleGuard::new(db, &cache);
    let result = guard
        .require(Some(42), &[300], RoleRequirement::EventOrganizer)
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a denial becomes an Unauthorized error with the denial reason.
///
/// Expected: Err(AppError::Unauthorized)
#[tokio::test]
async fn converts_denial_to_unauthorized() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let cache = new_cache();

    GuildSettingsFactory::new(db)
        .guild_id(42)
        .organizer_role(Some(300))
        .build()
        .await?;

    let guard = RoleGuard::new(db, &cache);
    let err = guard
        .require(Some(42), &[], RoleRequirement::EventOrganizer)
        .await
        .unwrap_err();

    assert_eq!(err.status(), OperationStatus::Unauthorized);
    assert_eq!(
        err.user_message(),
        "You must have the Event Organizer role to use this command."
    );

    Ok(())
}
