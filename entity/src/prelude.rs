pub use super::event_participant::Entity as EventParticipant;
pub use super::guild_event::Entity as GuildEvent;
pub use super::guild_settings::Entity as GuildSettings;
pub use super::loot_pile::Entity as LootPile;
pub use super::participant_session::Entity as ParticipantSession;
