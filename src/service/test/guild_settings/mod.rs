use crate::{
    cache::{MemorySettingsCache, SettingsCache},
    error::AppError,
    middleware::role::{RoleCheck, RoleGuard, RoleRequirement},
    model::guild_settings::GuildSettings,
    service::guild_settings::GuildSettingsService,
};
use std::time::Duration;
use test_utils::{builder::TestBuilder, factory::guild_settings::GuildSettingsFactory};

mod set;

fn new_cache() -> MemorySettingsCache {
    MemorySettingsCache::new(Duration::from_secs(600))
}
