//! Domain models for guild events and their lifecycle.
//!
//! The lifecycle table lives here as pure data ([`EventTransition`]) so the service
//! layer and tests share one definition of which moves are legal.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::util::parse::{parse_optional_snowflake, parse_snowflake};

pub use entity::sea_orm_active_enums::EventStatus;

/// Maximum event name length in characters.
pub const MAX_EVENT_NAME_LENGTH: usize = 256;

/// Maximum event description length in characters.
pub const MAX_EVENT_DESCRIPTION_LENGTH: usize = 2048;

/// A tracked group activity owned by a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildEvent {
    pub id: i32,
    pub guild_id: u64,
    /// Message displaying the event, set once the event has been posted.
    pub message_id: Option<u64>,
    /// Channel holding `message_id`.
    pub origin_channel_id: Option<u64>,
    pub name: String,
    pub description: Option<String>,
    pub minimum_participant_minutes: Option<i32>,
    pub maximum_participants: Option<i32>,
    pub current_state: EventStatus,
    pub created_at: DateTime<Utc>,
    pub created_by: u64,
    pub started_at: Option<DateTime<Utc>>,
    pub started_by: Option<u64>,
    pub completed_at: Option<DateTime<Utc>>,
    pub completed_by: Option<u64>,
    /// Channels whose members count as participants. Unique by id.
    pub participant_channels: Vec<u64>,
}

impl GuildEvent {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildEvent)` - Successfully converted event
    /// - `Err(DbErr::Custom)` - A stored snowflake failed to parse
    pub fn from_entity(entity: entity::guild_event::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            message_id: parse_optional_snowflake("message_id", entity.message_id.as_deref())?,
            origin_channel_id: parse_optional_snowflake(
                "origin_channel_id",
                entity.origin_channel_id.as_deref(),
            )?,
            name: entity.name,
            description: entity.description,
            minimum_participant_minutes: entity.minimum_participant_minutes,
            maximum_participants: entity.maximum_participants,
            current_state: entity.current_state,
            created_at: entity.created_at,
            created_by: parse_snowflake("created_by", &entity.created_by)?,
            started_at: entity.started_at,
            started_by: parse_optional_snowflake("started_by", entity.started_by.as_deref())?,
            completed_at: entity.completed_at,
            completed_by: parse_optional_snowflake(
                "completed_by",
                entity.completed_by.as_deref(),
            )?,
            participant_channels: entity
                .participant_channels
                .0
                .into_iter()
                .map(|c| c.channel_id)
                .collect(),
        })
    }

    /// Where the event is displayed, if it has been posted.
    ///
    /// # Returns
    /// - `Some((channel_id, message_id))` - Both halves of the publish location are known
    /// - `None` - The event was never posted
    pub fn published_at(&self) -> Option<(u64, u64)> {
        self.origin_channel_id.zip(self.message_id)
    }

    pub fn has_participant_channel(&self, channel_id: u64) -> bool {
        self.participant_channels.contains(&channel_id)
    }
}

/// Parameters for creating a new event.
///
/// Values are validated by the event service, not here.
#[derive(Debug, Clone)]
pub struct CreateGuildEventParams {
    pub guild_id: u64,
    /// Discord id of the organizer creating the event.
    pub created_by: u64,
    pub name: String,
    pub description: Option<String>,
    pub minimum_participant_minutes: Option<i32>,
    pub maximum_participants: Option<i32>,
}

/// A lifecycle move requested by an organizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTransition {
    Start,
    Pause,
    Resume,
    Complete,
    Cancel,
}

impl EventTransition {
    pub const ALL: [EventTransition; 5] = [
        Self::Start,
        Self::Pause,
        Self::Resume,
        Self::Complete,
        Self::Cancel,
    ];

    /// State the event is in after the transition succeeds.
    pub fn target(self) -> EventStatus {
        match self {
            Self::Start | Self::Resume => EventStatus::Active,
            Self::Pause => EventStatus::Paused,
            Self::Complete => EventStatus::Completed,
            Self::Cancel => EventStatus::Cancelled,
        }
    }

    /// States the transition may start from.
    pub fn allowed_from(self) -> &'static [EventStatus] {
        match self {
            Self::Start => &[EventStatus::Created],
            Self::Pause => &[EventStatus::Active],
            Self::Resume => &[EventStatus::Paused],
            Self::Complete => &[EventStatus::Active],
            Self::Cancel => &[
                EventStatus::Created,
                EventStatus::Active,
                EventStatus::Paused,
                EventStatus::Completed,
            ],
        }
    }

    pub fn is_allowed_from(self, current: EventStatus) -> bool {
        self.allowed_from().contains(&current)
    }

    /// Verb used in confirmation messages, e.g. "has been started".
    pub fn past_tense(self) -> &'static str {
        match self {
            Self::Start => "started",
            Self::Pause => "paused",
            Self::Resume => "resumed",
            Self::Complete => "completed",
            Self::Cancel => "cancelled",
        }
    }
}

/// Audit columns written alongside a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditStamp {
    Started { at: DateTime<Utc>, by: u64 },
    Completed { at: DateTime<Utc>, by: u64 },
}

/// Parameters for persisting a lifecycle transition.
///
/// The update only applies while the stored state still equals `expected`.
#[derive(Debug, Clone, Copy)]
pub struct UpdateEventStateParams {
    pub id: i32,
    pub expected: EventStatus,
    pub target: EventStatus,
    pub stamp: Option<AuditStamp>,
}
