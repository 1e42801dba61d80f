use sea_orm::DatabaseConnection;

use crate::{
    cache::SettingsCache,
    data::guild_settings::GuildSettingsRepository,
    error::operation::OperationResult,
    model::guild_settings::{GuildSettings, SettingsField},
};

/// Reads and writes per-guild settings.
///
/// Every successful write evicts the guild's cache entry. Writes never populate the
/// cache; the next role check reloads from storage.
pub struct GuildSettingsService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn SettingsCache,
}

impl<'a> GuildSettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn SettingsCache) -> Self {
        Self { db, cache }
    }

    /// Gets a guild's settings.
    ///
    /// A guild that has never written a setting gets all fields unset rather than an
    /// error.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Stored or default settings
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get(&self, guild_id: u64) -> OperationResult<GuildSettings> {
        let repo = GuildSettingsRepository::new(self.db);

        Ok(repo
            .find_by_guild_id(guild_id)
            .await?
            .unwrap_or_else(|| GuildSettings::unconfigured(guild_id)))
    }

    /// Sets or clears the channel loot piles are posted in.
    pub async fn set_loot_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> OperationResult<GuildSettings> {
        self.set(guild_id, SettingsField::LootChannel, channel_id)
            .await
    }

    /// Sets or clears the channel events are posted in.
    pub async fn set_event_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> OperationResult<GuildSettings> {
        self.set(guild_id, SettingsField::EventChannel, channel_id)
            .await
    }

    /// Sets or clears the role required to manage events.
    pub async fn set_organizer_role(
        &self,
        guild_id: u64,
        role_id: Option<u64>,
    ) -> OperationResult<GuildSettings> {
        self.set(guild_id, SettingsField::OrganizerRole, role_id)
            .await
    }

    /// Sets or clears the role required to participate in events.
    pub async fn set_participant_role(
        &self,
        guild_id: u64,
        role_id: Option<u64>,
    ) -> OperationResult<GuildSettings> {
        self.set(guild_id, SettingsField::ParticipantRole, role_id)
            .await
    }

    async fn set(
        &self,
        guild_id: u64,
        field: SettingsField,
        value: Option<u64>,
    ) -> OperationResult<GuildSettings> {
        let repo = GuildSettingsRepository::new(self.db);

        // Cache stays untouched when the write fails
        let settings = repo.set_field(guild_id, field, value).await?;
        self.cache.invalidate(guild_id);

        tracing::debug!(
            "Set {:?} to {:?} for guild {}",
            field,
            field.get(&settings),
            guild_id
        );

        Ok(settings)
    }
}
