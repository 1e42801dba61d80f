use sea_orm::DatabaseConnection;

use crate::{
    cache::SettingsCache,
    data::guild_settings::GuildSettingsRepository,
    error::{operation::OperationResult, AppError},
    model::guild_settings::GuildSettings,
};

/// Picks the role a guild requires for some class of commands.
pub type RoleSelector = fn(&GuildSettings) -> Option<u64>;

/// Guild role a command may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement {
    EventOrganizer,
    EventParticipant,
}

impl RoleRequirement {
    pub fn selector(self) -> RoleSelector {
        match self {
            Self::EventOrganizer => |s: &GuildSettings| s.event_organizer_role_id,
            Self::EventParticipant => |s: &GuildSettings| s.event_participant_role_id,
        }
    }

    /// Name shown to users when the role is missing.
    pub fn role_name(self) -> &'static str {
        match self {
            Self::EventOrganizer => "Event Organizer",
            Self::EventParticipant => "Event Participant",
        }
    }
}

/// Outcome of a role check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleCheck {
    Allowed,
    /// Carries the reason shown to the user.
    Denied(String),
}

/// Gate in front of role-restricted commands.
///
/// Settings are read through the shared cache and loaded from storage on a miss. A
/// guild with no configured role for a requirement lets everyone through.
pub struct RoleGuard<'a> {
    db: &'a DatabaseConnection,
    cache: &'a dyn SettingsCache,
}

impl<'a> RoleGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, cache: &'a dyn SettingsCache) -> Self {
        Self { db, cache }
    }

    /// Checks a member against one of the guild's configured roles.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command was issued in, `None` outside of guilds
    /// - `member_roles` - Role ids held by the acting member
    /// - `requirement` - Which configured role to check
    ///
    /// # Returns
    /// - `Ok(RoleCheck::Allowed)` - No role configured, or the member holds it
    /// - `Ok(RoleCheck::Denied)` - Not in a guild, guild has no settings, or role missing
    /// - `Err(AppError::DbErr)` - Settings could not be loaded
    pub async fn check(
        &self,
        guild_id: Option<u64>,
        member_roles: &[u64],
        requirement: RoleRequirement,
    ) -> OperationResult<RoleCheck> {
        self.check_with(
            guild_id,
            member_roles,
            requirement.selector(),
            requirement.role_name(),
        )
        .await
    }

    /// Checks a member against the role picked by `selector`.
    pub async fn check_with(
        &self,
        guild_id: Option<u64>,
        member_roles: &[u64],
        selector: RoleSelector,
        role_name: &str,
    ) -> OperationResult<RoleCheck> {
        let Some(guild_id) = guild_id else {
            return Ok(RoleCheck::Denied("Guild could not be found.".to_string()));
        };

        let Some(settings) = self.load_settings(guild_id).await? else {
            return Ok(RoleCheck::Denied("Guild settings not found.".to_string()));
        };

        let Some(required_role) = selector(&settings) else {
            return Ok(RoleCheck::Allowed);
        };

        if member_roles.contains(&required_role) {
            Ok(RoleCheck::Allowed)
        } else {
            Ok(RoleCheck::Denied(format!(
                "You must have the {} role to use this command.",
                role_name
            )))
        }
    }

    /// Like [`check`](Self::check), but turns a denial into `AppError::Unauthorized`.
    pub async fn require(
        &self,
        guild_id: Option<u64>,
        member_roles: &[u64],
        requirement: RoleRequirement,
    ) -> OperationResult<()> {
        match self.check(guild_id, member_roles, requirement).await? {
            RoleCheck::Allowed => Ok(()),
            RoleCheck::Denied(reason) => {
                tracing::debug!(
                    "Denied {:?} check in guild {:?}: {}",
                    requirement,
                    guild_id,
                    reason
                );
                Err(AppError::Unauthorized(reason))
            }
        }
    }

    async fn load_settings(&self, guild_id: u64) -> OperationResult<Option<GuildSettings>> {
        if let Some(settings) = self.cache.get(guild_id) {
            return Ok(Some(settings));
        }

        let repo = GuildSettingsRepository::new(self.db);
        let settings = repo.find_by_guild_id(guild_id).await?;

        // Missing rows are not cached so the first write is seen immediately
        if let Some(settings) = &settings {
            self.cache.insert(settings.clone());
        }

        Ok(settings)
    }
}
