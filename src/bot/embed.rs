//! Embed builders for event announcements and settings replies.
//!
//! The formatting helpers are plain functions so the rendered text can be tested without
//! a Discord connection.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    error::{operation::OperationResult, AppError},
    model::{
        guild_event::{EventStatus, GuildEvent},
        guild_settings::GuildSettings,
    },
};

const NOT_SET: &str = "Not set";

/// Embed color for an event in the given state.
pub fn state_color(state: EventStatus) -> u32 {
    match state {
        EventStatus::Created => 0x00B4FF,
        EventStatus::Active => 0x00C896,
        EventStatus::Paused => 0x646464,
        EventStatus::Completed => 0xC89600,
        EventStatus::Cancelled => 0xC80000,
    }
}

pub fn channel_mention(channel_id: u64) -> String {
    format!("<#{}>", channel_id)
}

pub fn role_mention(role_id: u64) -> String {
    format!("<@&{}>", role_id)
}

/// Renders an optional setting, falling back to "Not set".
pub fn setting_value(value: Option<u64>, mention: fn(u64) -> String) -> String {
    value.map(mention).unwrap_or_else(|| NOT_SET.to_string())
}

/// Renders participant channels as mentions, one per line.
pub fn channel_list(channel_ids: &[u64]) -> String {
    if channel_ids.is_empty() {
        return "None".to_string();
    }

    channel_ids
        .iter()
        .map(|&id| channel_mention(id))
        .collect::<Vec<_>>()
        .join("\n")
}

fn discord_timestamp(at: DateTime<Utc>) -> OperationResult<Timestamp> {
    Timestamp::from_unix_timestamp(at.timestamp()).map_err(|e| {
        AppError::InternalError(format!(
            "Invalid Discord timestamp {}: {}",
            at.timestamp(),
            e
        ))
    })
}

/// Builds the announcement embed of an event.
///
/// # Returns
/// - `Ok(CreateEmbed)` - Embed ready for posting or editing
/// - `Err(AppError::InternalError)` - Creation time cannot be represented by Discord
pub fn event_embed(event: &GuildEvent) -> OperationResult<CreateEmbed> {
    let mut embed = CreateEmbed::new()
        .title(&event.name)
        .color(state_color(event.current_state))
        .field("Status", event.current_state.as_str(), true)
        .field("Organizer", format!("<@{}>", event.created_by), true);

    if let Some(description) = &event.description {
        embed = embed.description(description);
    }
    if let Some(max) = event.maximum_participants {
        embed = embed.field("Max participants", max.to_string(), true);
    }
    if let Some(minutes) = event.minimum_participant_minutes {
        embed = embed.field("Min participation", format!("{} minutes", minutes), true);
    }

    embed = embed.field(
        "Participant channels",
        channel_list(&event.participant_channels),
        false,
    );

    if let (Some(at), Some(by)) = (event.started_at, event.started_by) {
        embed = embed.field(
            "Started",
            format!("<t:{}:f> by <@{}>", at.timestamp(), by),
            false,
        );
    }
    if let (Some(at), Some(by)) = (event.completed_at, event.completed_by) {
        embed = embed.field(
            "Completed",
            format!("<t:{}:f> by <@{}>", at.timestamp(), by),
            false,
        );
    }

    Ok(embed
        .footer(CreateEmbedFooter::new(format!("Event #{}", event.id)))
        .timestamp(discord_timestamp(event.created_at)?))
}

/// Builds the `/admin settings` embed.
pub fn settings_embed(settings: &GuildSettings) -> CreateEmbed {
    CreateEmbed::new()
        .title("Server settings")
        .color(state_color(EventStatus::Created))
        .field(
            "Event channel",
            setting_value(settings.event_channel_id, channel_mention),
            true,
        )
        .field(
            "Loot channel",
            setting_value(settings.loot_channel_id, channel_mention),
            true,
        )
        .field(
            "Organizer role",
            setting_value(settings.event_organizer_role_id, role_mention),
            true,
        )
        .field(
            "Participant role",
            setting_value(settings.event_participant_role_id, role_mention),
            true,
        )
}
