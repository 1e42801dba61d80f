//! Event lifecycle engine.
//!
//! Owns event creation, lifecycle transitions and the participant channel list. Role
//! checks happen before these methods are called; the acting user passed in is only
//! recorded for audit.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::guild_event::GuildEventRepository,
    error::{operation::OperationResult, AppError},
    model::guild_event::{
        AuditStamp, CreateGuildEventParams, EventStatus, EventTransition, GuildEvent,
        UpdateEventStateParams, MAX_EVENT_DESCRIPTION_LENGTH, MAX_EVENT_NAME_LENGTH,
    },
};

fn event_not_found() -> AppError {
    AppError::NotFound("Event not found.".to_string())
}

fn invalid_transition(current: EventStatus, target: EventStatus) -> AppError {
    AppError::InvalidState(format!(
        "Cannot change event from {} to {}.",
        current, target
    ))
}

pub struct GuildEventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildEventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event in the `Created` state.
    ///
    /// Name and description are trimmed first. A description that is empty after
    /// trimming is stored as absent.
    ///
    /// # Returns
    /// - `Ok(GuildEvent)` - The created event
    /// - `Err(AppError::Validation)` - Empty or oversized name, oversized description,
    ///   negative minimum minutes or a participant cap below 1
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateGuildEventParams) -> OperationResult<GuildEvent> {
        let params = Self::validate(params)?;
        let repo = GuildEventRepository::new(self.db);

        let event = repo.create(params).await?;

        tracing::debug!(
            "Created event {} '{}' in guild {} by {}",
            event.id,
            event.name,
            event.guild_id,
            event.created_by
        );

        Ok(event)
    }

    fn validate(mut params: CreateGuildEventParams) -> OperationResult<CreateGuildEventParams> {
        params.name = params.name.trim().to_string();
        if params.name.is_empty() {
            return Err(AppError::Validation("Event name is required.".to_string()));
        }
        if params.name.chars().count() > MAX_EVENT_NAME_LENGTH {
            return Err(AppError::Validation(format!(
                "Event name cannot be longer than {} characters.",
                MAX_EVENT_NAME_LENGTH
            )));
        }

        params.description = params
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if let Some(description) = &params.description {
            if description.chars().count() > MAX_EVENT_DESCRIPTION_LENGTH {
                return Err(AppError::Validation(format!(
                    "Event description cannot be longer than {} characters.",
                    MAX_EVENT_DESCRIPTION_LENGTH
                )));
            }
        }

        if params.minimum_participant_minutes.is_some_and(|m| m < 0) {
            return Err(AppError::Validation(
                "Minimum participation cannot be negative.".to_string(),
            ));
        }
        if params.maximum_participants.is_some_and(|m| m < 1) {
            return Err(AppError::Validation(
                "Maximum participants must be at least 1.".to_string(),
            ));
        }

        Ok(params)
    }

    /// Gets an event that belongs to the given guild.
    ///
    /// Events of other guilds are reported as missing.
    ///
    /// # Returns
    /// - `Ok(GuildEvent)` - Event found in this guild
    /// - `Err(AppError::NotFound)` - No such event in this guild
    pub async fn get_in_guild(&self, guild_id: u64, id: i32) -> OperationResult<GuildEvent> {
        let repo = GuildEventRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .filter(|event| event.guild_id == guild_id)
            .ok_or_else(event_not_found)
    }

    /// Lists a guild's events, newest first.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `status` - Only include events in this state, or every event when `None`
    pub async fn list_for_guild(
        &self,
        guild_id: u64,
        status: Option<EventStatus>,
    ) -> OperationResult<Vec<GuildEvent>> {
        let repo = GuildEventRepository::new(self.db);

        Ok(repo.get_by_guild(guild_id, status).await?)
    }

    /// Records the message displaying an event.
    ///
    /// Allowed in every state.
    ///
    /// # Returns
    /// - `Ok(())` - Message recorded
    /// - `Err(AppError::NotFound)` - No event with that id
    pub async fn set_event_message(
        &self,
        id: i32,
        message_id: u64,
        origin_channel_id: u64,
    ) -> OperationResult<()> {
        let repo = GuildEventRepository::new(self.db);

        if !repo.set_message(id, origin_channel_id, message_id).await? {
            return Err(event_not_found());
        }

        tracing::debug!(
            "Event {} is displayed by message {} in channel {}",
            id,
            message_id,
            origin_channel_id
        );

        Ok(())
    }

    pub async fn start(&self, id: i32, acting_user: u64) -> OperationResult<GuildEvent> {
        self.transition(id, EventTransition::Start, acting_user)
            .await
    }

    pub async fn pause(&self, id: i32, acting_user: u64) -> OperationResult<GuildEvent> {
        self.transition(id, EventTransition::Pause, acting_user)
            .await
    }

    pub async fn resume(&self, id: i32, acting_user: u64) -> OperationResult<GuildEvent> {
        self.transition(id, EventTransition::Resume, acting_user)
            .await
    }

    pub async fn complete(&self, id: i32, acting_user: u64) -> OperationResult<GuildEvent> {
        self.transition(id, EventTransition::Complete, acting_user)
            .await
    }

    pub async fn cancel(&self, id: i32, acting_user: u64) -> OperationResult<GuildEvent> {
        self.transition(id, EventTransition::Cancel, acting_user)
            .await
    }

    /// Applies a lifecycle transition.
    ///
    /// The write only succeeds if the stored state still matches the state the
    /// transition was validated against. When another writer moved the event first, the
    /// failure names the state it moved to.
    ///
    /// # Arguments
    /// - `id` - Event to transition
    /// - `transition` - Requested move
    /// - `acting_user` - Discord user id, stored in the start and complete audit columns
    ///
    /// # Returns
    /// - `Ok(GuildEvent)` - The event after the transition
    /// - `Err(AppError::NotFound)` - No event with that id
    /// - `Err(AppError::InvalidState)` - Transition not allowed from the current state
    /// - `Err(AppError::DbErr)` - Database error; the state may not have been written
    pub async fn transition(
        &self,
        id: i32,
        transition: EventTransition,
        acting_user: u64,
    ) -> OperationResult<GuildEvent> {
        let repo = GuildEventRepository::new(self.db);

        let mut event = repo.find_by_id(id).await?.ok_or_else(event_not_found)?;
        let current = event.current_state;
        let target = transition.target();

        if !transition.is_allowed_from(current) {
            return Err(invalid_transition(current, target));
        }

        let now = Utc::now();
        let stamp = match transition {
            EventTransition::Start => Some(AuditStamp::Started {
                at: now,
                by: acting_user,
            }),
            EventTransition::Complete => Some(AuditStamp::Completed {
                at: now,
                by: acting_user,
            }),
            EventTransition::Pause | EventTransition::Resume | EventTransition::Cancel => None,
        };

        let applied = repo
            .update_state(UpdateEventStateParams {
                id,
                expected: current,
                target,
                stamp,
            })
            .await?;

        if !applied {
            let fresh = repo.find_by_id(id).await?.ok_or_else(event_not_found)?;
            tracing::warn!(
                "Event {} changed to {} before it could be {}",
                id,
                fresh.current_state,
                transition.past_tense()
            );
            return Err(invalid_transition(fresh.current_state, target));
        }

        event.current_state = target;
        match stamp {
            Some(AuditStamp::Started { at, by }) => {
                event.started_at = Some(at);
                event.started_by = Some(by);
            }
            Some(AuditStamp::Completed { at, by }) => {
                event.completed_at = Some(at);
                event.completed_by = Some(by);
            }
            None => {}
        }

        tracing::debug!(
            "Event {} {} by {} ({} -> {})",
            id,
            transition.past_tense(),
            acting_user,
            current,
            target
        );

        Ok(event)
    }

    /// Adds a channel whose members count as participants.
    ///
    /// # Returns
    /// - `Ok(Vec<u64>)` - The channel list after the add
    /// - `Err(AppError::NotFound)` - No event with that id
    /// - `Err(AppError::InvalidState)` - Event is no longer in the `Created` state
    /// - `Err(AppError::Validation)` - Channel already associated
    pub async fn add_participant_channel(
        &self,
        id: i32,
        channel_id: u64,
    ) -> OperationResult<Vec<u64>> {
        let repo = GuildEventRepository::new(self.db);

        let event = repo.find_by_id(id).await?.ok_or_else(event_not_found)?;

        if event.current_state != EventStatus::Created {
            return Err(AppError::InvalidState(
                "Channels can only be modified while the event is in Created state.".to_string(),
            ));
        }
        if event.has_participant_channel(channel_id) {
            return Err(AppError::Validation(
                "This channel is already added.".to_string(),
            ));
        }

        let mut channels = event.participant_channels;
        channels.push(channel_id);

        if !repo.set_channels(id, &channels).await? {
            return Err(event_not_found());
        }

        tracing::debug!("Added participant channel {} to event {}", channel_id, id);

        Ok(channels)
    }

    /// Removes a participant channel.
    ///
    /// Allowed in every state.
    ///
    /// # Returns
    /// - `Ok(Vec<u64>)` - The channel list after the removal
    /// - `Err(AppError::NotFound)` - No event with that id
    /// - `Err(AppError::Validation)` - Channel not associated with the event
    pub async fn remove_participant_channel(
        &self,
        id: i32,
        channel_id: u64,
    ) -> OperationResult<Vec<u64>> {
        let repo = GuildEventRepository::new(self.db);

        let event = repo.find_by_id(id).await?.ok_or_else(event_not_found)?;

        if !event.has_participant_channel(channel_id) {
            return Err(AppError::Validation(
                "This channel is not associated with the event.".to_string(),
            ));
        }

        let channels: Vec<u64> = event
            .participant_channels
            .into_iter()
            .filter(|&c| c != channel_id)
            .collect();

        if !repo.set_channels(id, &channels).await? {
            return Err(event_not_found());
        }

        tracing::debug!(
            "Removed participant channel {} from event {}",
            channel_id,
            id
        );

        Ok(channels)
    }

    /// Gets the participant channels of an event.
    ///
    /// A missing event yields an empty list rather than an error.
    pub async fn get_participant_channels(&self, id: i32) -> OperationResult<Vec<u64>> {
        let repo = GuildEventRepository::new(self.db);

        Ok(repo
            .find_by_id(id)
            .await?
            .map(|event| event.participant_channels)
            .unwrap_or_default())
    }
}
