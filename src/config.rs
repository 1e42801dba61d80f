use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

/// How long guild settings stay cached for role checks unless overridden.
pub const DEFAULT_SETTINGS_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,
    pub settings_cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            settings_cache_ttl: parse_cache_ttl(
                std::env::var("SETTINGS_CACHE_TTL_SECONDS").ok(),
            )?,
        })
    }
}

/// Parses the optional cache TTL override, in whole seconds.
fn parse_cache_ttl(value: Option<String>) -> Result<Duration, ConfigError> {
    match value {
        None => Ok(DEFAULT_SETTINGS_CACHE_TTL),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "SETTINGS_CACHE_TTL_SECONDS".to_string(),
                value: raw,
            }),
    }
}
