//! Event participant factory.
//!
//! Participation tracking has no service layer yet; these rows only exist so tests can
//! verify that an event owns its children.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a participation record for a unique user on the given event.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - Owning event
///
/// # Returns
/// - `Ok(Model)` - The created participant
/// - `Err(DbErr)` - Database error, including a missing parent event
pub async fn create_event_participant(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::event_participant::Model, DbErr> {
    entity::event_participant::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(next_id().to_string()),
        total_participation_seconds: ActiveValue::Set(0),
        excluded_from_loot: ActiveValue::Set(false),
        ..Default::default()
    }
    .insert(db)
    .await
}
