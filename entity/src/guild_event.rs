use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::EventStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub message_id: Option<String>,
    pub origin_channel_id: Option<String>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub minimum_participant_minutes: Option<i32>,
    pub maximum_participants: Option<i32>,
    pub current_state: EventStatus,
    pub created_at: DateTimeUtc,
    pub created_by: String,
    pub started_at: Option<DateTimeUtc>,
    pub started_by: Option<String>,
    pub completed_at: Option<DateTimeUtc>,
    pub completed_by: Option<String>,
    #[sea_orm(column_type = "Json")]
    pub participant_channels: ParticipantChannels,
}

/// Channels whose members count as participants, embedded in the event row as JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ParticipantChannels(pub Vec<ParticipantChannel>);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantChannel {
    pub channel_id: u64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_participant::Entity")]
    EventParticipant,
    #[sea_orm(has_many = "super::loot_pile::Entity")]
    LootPile,
    #[sea_orm(has_many = "super::participant_session::Entity")]
    ParticipantSession,
}

impl Related<super::event_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventParticipant.def()
    }
}

impl Related<super::loot_pile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LootPile.def()
    }
}

impl Related<super::participant_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParticipantSession.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
