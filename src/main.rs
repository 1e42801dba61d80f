mod bot;
mod cache;
mod config;
mod data;
mod error;
mod middleware;
mod model;
mod service;
mod startup;
mod state;
mod util;

use std::sync::Arc;

use crate::{
    cache::MemorySettingsCache, config::Config, error::AppError, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let settings_cache = Arc::new(MemorySettingsCache::new(config.settings_cache_ttl));
    let state = AppState::new(db, settings_cache);

    tracing::info!(
        "Starting loot goblin (settings cache TTL {}s)",
        config.settings_cache_ttl.as_secs()
    );

    let client = bot::start::init_bot(&config, state).await?;
    bot::start::start_bot(client).await
}
