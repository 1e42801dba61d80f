//! Guild event factory for creating test events.
//!
//! Events can be created directly in any lifecycle state so tests can exercise
//! transitions without replaying the whole lifecycle.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::{
    guild_event::{ParticipantChannel, ParticipantChannels},
    sea_orm_active_enums::EventStatus,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_event::GuildEventFactory;
///
/// let event = GuildEventFactory::new(&db, 42)
///     .name("Raid Night")
///     .state(EventStatus::Paused)
///     .channels(&[1001, 1002])
///     .build()
///     .await?;
/// ```
pub struct GuildEventFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    name: String,
    description: Option<String>,
    created_by: u64,
    state: EventStatus,
    minimum_participant_minutes: Option<i32>,
    maximum_participants: Option<i32>,
    channels: Vec<u64>,
}

impl<'a> GuildEventFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - name: `"Event {id}"` where id is auto-incremented
    /// - state: `Created`
    /// - no description, policy limits or participant channels
    pub fn new(db: &'a DatabaseConnection, guild_id: u64) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id,
            name: format!("Event {}", id),
            description: None,
            created_by: id,
            state: EventStatus::Created,
            minimum_participant_minutes: None,
            maximum_participants: None,
            channels: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn created_by(mut self, user_id: u64) -> Self {
        self.created_by = user_id;
        self
    }

    pub fn state(mut self, state: EventStatus) -> Self {
        self.state = state;
        self
    }

    pub fn minimum_participant_minutes(mut self, minutes: Option<i32>) -> Self {
        self.minimum_participant_minutes = minutes;
        self
    }

    pub fn maximum_participants(mut self, max: Option<i32>) -> Self {
        self.maximum_participants = max;
        self
    }

    pub fn channels(mut self, channel_ids: &[u64]) -> Self {
        self.channels = channel_ids.to_vec();
        self
    }

    /// Inserts the event.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_event::Model, DbErr> {
        let channels = self
            .channels
            .into_iter()
            .map(|channel_id| ParticipantChannel { channel_id })
            .collect();

        entity::guild_event::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            message_id: ActiveValue::Set(None),
            origin_channel_id: ActiveValue::Set(None),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            minimum_participant_minutes: ActiveValue::Set(self.minimum_participant_minutes),
            maximum_participants: ActiveValue::Set(self.maximum_participants),
            current_state: ActiveValue::Set(self.state),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(self.created_by.to_string()),
            started_at: ActiveValue::Set(None),
            started_by: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            completed_by: ActiveValue::Set(None),
            participant_channels: ActiveValue::Set(ParticipantChannels(channels)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event in the `Created` state with default values.
pub async fn create_guild_event(
    db: &DatabaseConnection,
    guild_id: u64,
) -> Result<entity::guild_event::Model, DbErr> {
    GuildEventFactory::new(db, guild_id).build().await
}
