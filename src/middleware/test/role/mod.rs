use crate::{
    cache::{MemorySettingsCache, SettingsCache},
    error::{operation::OperationStatus, AppError},
    middleware::role::{RoleCheck, RoleGuard, RoleRequirement},
    model::guild_settings::GuildSettings,
};
use std::time::Duration;
use test_utils::{builder::TestBuilder, factory::guild_settings::GuildSettingsFactory};

mod require;

fn new_cache() -> MemorySettingsCache {
    MemorySettingsCache::new(Duration::from_secs(600))
}
