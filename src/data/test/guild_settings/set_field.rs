use super::*;

/// Tests writing a setting for a guild without a row.
///
/// Verifies that the row is created with only the targeted field populated.
///
/// Expected: Ok with a new row
#[tokio::test]
async fn creates_row_on_first_write() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo
        .set_field(42, SettingsField::LootChannel, Some(555))
        .await?;

    assert_eq!(settings.guild_id, 42);
    assert_eq!(settings.loot_channel_id, Some(555));
    assert_eq!(settings.event_channel_id, None);
    assert_eq!(settings.event_organizer_role_id, None);
    assert_eq!(settings.event_participant_role_id, None);

    let stored = repo.find_by_guild_id(42).await?.unwrap();
    assert_eq!(stored, settings);

    Ok(())
}

/// Tests that writing one field leaves the others untouched.
///
/// Expected: Ok with only the organizer role changed
#[tokio::test]
async fn preserves_other_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db)
        .guild_id(42)
        .event_channel(Some(100))
        .loot_channel(Some(200))
        .organizer_role(Some(300))
        .participant_role(Some(400))
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo
        .set_field(42, SettingsField::OrganizerRole, Some(301))
        .await?;

    assert_eq!(settings.event_channel_id, Some(100));
    assert_eq!(settings.loot_channel_id, Some(200));
    assert_eq!(settings.event_organizer_role_id, Some(301));
    assert_eq!(settings.event_participant_role_id, Some(400));

    Ok(())
}

/// Tests clearing a setting.
///
/// Expected: Ok with the field set back to None
#[tokio::test]
async fn clears_field_with_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db)
        .guild_id(42)
        .participant_role(Some(400))
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo
        .set_field(42, SettingsField::ParticipantRole, None)
        .await?;

    assert_eq!(settings.event_participant_role_id, None);
    assert_eq!(
        repo.find_by_guild_id(42)
            .await?
            .unwrap()
            .event_participant_role_id,
        None
    );

    Ok(())
}

/// Tests that every field maps to its own column.
///
/// Expected: each write is readable back through `SettingsField::get`
#[tokio::test]
async fn each_field_round_trips() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_settings_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let fields = [
        (SettingsField::EventChannel, 11),
        (SettingsField::LootChannel, 22),
        (SettingsField::OrganizerRole, 33),
        (SettingsField::ParticipantRole, 44),
    ];

    for (field, value) in fields {
        repo.set_field(7, field, Some(value)).await?;
    }

    let stored = repo.find_by_guild_id(7).await?.unwrap();
    for (field, value) in fields {
        assert_eq!(field.get(&stored), Some(value), "{:?}", field);
    }

    Ok(())
}
