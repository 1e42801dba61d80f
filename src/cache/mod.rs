//! Guild settings cache.
//!
//! Settings are read on every gated command, so the role guard consults this cache
//! before touching the database. Any write to a guild's settings must invalidate that
//! guild's entry; a stale entry may otherwise be served until its TTL expires.

pub mod memory;

use crate::model::guild_settings::GuildSettings;

pub use memory::MemorySettingsCache;

/// Key-value cache of settings by guild id.
///
/// Implementations must be safe to share across concurrently running command handlers.
pub trait SettingsCache: Send + Sync {
    /// Returns the cached settings for a guild, if present and not expired.
    fn get(&self, guild_id: u64) -> Option<GuildSettings>;

    /// Stores settings under their guild id, replacing any existing entry.
    fn insert(&self, settings: GuildSettings);

    /// Drops the entry for a guild. Missing entries are ignored.
    fn invalidate(&self, guild_id: u64);
}
