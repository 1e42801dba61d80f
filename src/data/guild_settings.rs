use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::guild_settings::{GuildSettings, SettingsField};

pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the settings row for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildSettings))` - Row exists
    /// - `Ok(None)` - Guild has never written a setting
    /// - `Err(DbErr)` - Database error or unparseable stored id
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildSettings>, DbErr> {
        entity::prelude::GuildSettings::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?
            .map(GuildSettings::from_entity)
            .transpose()
    }

    /// Writes a single setting, creating the guild's row if it does not exist.
    ///
    /// Only the targeted column is written on conflict, so concurrent writes to different
    /// fields of the same guild never overwrite each other.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `field` - Setting to write
    /// - `value` - New channel or role id, `None` to clear
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - The full row after the write
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn set_field(
        &self,
        guild_id: u64,
        field: SettingsField,
        value: Option<u64>,
    ) -> Result<GuildSettings, DbErr> {
        use entity::guild_settings::{ActiveModel, Column};

        let value = ActiveValue::Set(value.map(|id| id.to_string()));
        let mut model = ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            ..Default::default()
        };

        let column = match field {
            SettingsField::EventChannel => {
                model.event_channel_id = value;
                Column::EventChannelId
            }
            SettingsField::LootChannel => {
                model.loot_channel_id = value;
                Column::LootChannelId
            }
            SettingsField::OrganizerRole => {
                model.event_organizer_role_id = value;
                Column::EventOrganizerRoleId
            }
            SettingsField::ParticipantRole => {
                model.event_participant_role_id = value;
                Column::EventParticipantRoleId
            }
        };

        let row = entity::prelude::GuildSettings::insert(model)
            .on_conflict(
                OnConflict::column(Column::GuildId)
                    .update_column(column)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        GuildSettings::from_entity(row)
    }
}
