use super::*;

/// Tests that deleting an event removes the participation records it owns.
///
/// Expected: no participants remain after the event row is deleted
#[tokio::test]
async fn deleting_event_removes_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::create_guild_event(db, 42).await?;
    let other = factory::create_guild_event(db, 42).await?;
    factory::create_event_participant(db, event.id).await?;
    factory::create_event_participant(db, event.id).await?;
    let kept = factory::create_event_participant(db, other.id).await?;

    event.delete(db).await?;

    let remaining = entity::prelude::EventParticipant::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    Ok(())
}
