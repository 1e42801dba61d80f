use sea_orm::DbErr;

use crate::util::parse::{parse_optional_snowflake, parse_snowflake};

/// Per-guild configuration.
///
/// Absent channels mean "use the channel the command was issued in"; absent roles mean
/// "no restriction".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildSettings {
    pub guild_id: u64,
    pub event_channel_id: Option<u64>,
    pub loot_channel_id: Option<u64>,
    pub event_organizer_role_id: Option<u64>,
    pub event_participant_role_id: Option<u64>,
}

impl GuildSettings {
    /// Settings for a guild that has never configured anything.
    pub fn unconfigured(guild_id: u64) -> Self {
        Self {
            guild_id,
            event_channel_id: None,
            loot_channel_id: None,
            event_organizer_role_id: None,
            event_participant_role_id: None,
        }
    }

    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Successfully converted settings
    /// - `Err(DbErr::Custom)` - A stored id failed to parse as u64
    pub fn from_entity(entity: entity::guild_settings::Model) -> Result<Self, DbErr> {
        Ok(Self {
            guild_id: parse_snowflake("guild_id", &entity.guild_id)?,
            event_channel_id: parse_optional_snowflake(
                "event_channel_id",
                entity.event_channel_id.as_deref(),
            )?,
            loot_channel_id: parse_optional_snowflake(
                "loot_channel_id",
                entity.loot_channel_id.as_deref(),
            )?,
            event_organizer_role_id: parse_optional_snowflake(
                "event_organizer_role_id",
                entity.event_organizer_role_id.as_deref(),
            )?,
            event_participant_role_id: parse_optional_snowflake(
                "event_participant_role_id",
                entity.event_participant_role_id.as_deref(),
            )?,
        })
    }
}

/// A single writable guild setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    EventChannel,
    LootChannel,
    OrganizerRole,
    ParticipantRole,
}

impl SettingsField {
    /// Reads this field from a settings value.
    pub fn get(self, settings: &GuildSettings) -> Option<u64> {
        match self {
            Self::EventChannel => settings.event_channel_id,
            Self::LootChannel => settings.loot_channel_id,
            Self::OrganizerRole => settings.event_organizer_role_id,
            Self::ParticipantRole => settings.event_participant_role_id,
        }
    }
}
