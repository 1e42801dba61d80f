//! Guild settings factory for creating test settings rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating guild settings with customizable fields.
///
/// Every setting defaults to `None`, matching a guild that has a row but no
/// configuration.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_settings::GuildSettingsFactory;
///
/// let settings = GuildSettingsFactory::new(&db)
///     .guild_id(42)
///     .organizer_role(Some(7))
///     .build()
///     .await?;
/// ```
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    event_channel_id: Option<u64>,
    loot_channel_id: Option<u64>,
    organizer_role_id: Option<u64>,
    participant_role_id: Option<u64>,
}

impl<'a> GuildSettingsFactory<'a> {
    /// Creates a new factory with a unique guild id and no settings.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            event_channel_id: None,
            loot_channel_id: None,
            organizer_role_id: None,
            participant_role_id: None,
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn event_channel(mut self, channel_id: Option<u64>) -> Self {
        self.event_channel_id = channel_id;
        self
    }

    pub fn loot_channel(mut self, channel_id: Option<u64>) -> Self {
        self.loot_channel_id = channel_id;
        self
    }

    pub fn organizer_role(mut self, role_id: Option<u64>) -> Self {
        self.organizer_role_id = role_id;
        self
    }

    pub fn participant_role(mut self, role_id: Option<u64>) -> Self {
        self.participant_role_id = role_id;
        self
    }

    /// Inserts the settings row.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            event_channel_id: ActiveValue::Set(self.event_channel_id.map(|id| id.to_string())),
            loot_channel_id: ActiveValue::Set(self.loot_channel_id.map(|id| id.to_string())),
            event_organizer_role_id: ActiveValue::Set(
                self.organizer_role_id.map(|id| id.to_string()),
            ),
            event_participant_role_id: ActiveValue::Set(
                self.participant_role_id.map(|id| id.to_string()),
            ),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a settings row with a unique guild id and nothing configured.
pub async fn create_guild_settings(
    db: &DatabaseConnection,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db).build().await
}
