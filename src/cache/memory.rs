//! In-process settings cache backed by a concurrent map.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{cache::SettingsCache, model::guild_settings::GuildSettings};

/// Cached settings with their expiration timestamp.
#[derive(Clone)]
struct CachedSettings {
    settings: GuildSettings,
    expires_at: Instant,
}

impl CachedSettings {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Settings cache with a fixed time-to-live per entry.
///
/// Expired entries are evicted lazily when they are next read. Clones share the same
/// underlying map.
#[derive(Clone)]
pub struct MemorySettingsCache {
    entries: Arc<DashMap<u64, CachedSettings>>,
    ttl: Duration,
}

impl MemorySettingsCache {
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// - `ttl` - How long an inserted entry stays readable
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Number of entries currently held, including expired ones not yet evicted.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsCache for MemorySettingsCache {
    fn get(&self, guild_id: u64) -> Option<GuildSettings> {
        // Clone out before any removal so no shard lock is held across `remove`
        let cached = self.entries.get(&guild_id).map(|entry| entry.value().clone())?;

        if cached.is_expired() {
            self.entries
                .remove_if(&guild_id, |_, entry| entry.is_expired());
            return None;
        }

        Some(cached.settings)
    }

    fn insert(&self, settings: GuildSettings) {
        let guild_id = settings.guild_id;
        self.entries.insert(
            guild_id,
            CachedSettings {
                settings,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    fn invalidate(&self, guild_id: u64) {
        self.entries.remove(&guild_id);
    }
}
