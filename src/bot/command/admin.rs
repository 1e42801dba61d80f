//! `/admin` command: per-guild configuration.
//!
//! Registered with the Administrator default permission, and checked again on every
//! invocation since server owners can override command permissions.

use serenity::all::{
    ChannelType, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::{
    bot::{
        command::{options::CommandArgs, require_guild, respond::Reply},
        embed,
    },
    error::{operation::OperationResult, AppError},
    service::guild_settings::GuildSettingsService,
    state::AppState,
};

pub const NAME: &str = "admin";

fn channel_subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description).add_sub_option(
        CreateCommandOption::new(
            CommandOptionType::Channel,
            "channel",
            "Channel to use, leave empty to clear",
        )
        .channel_types(vec![ChannelType::Text])
        .required(false),
    )
}

fn role_subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description).add_sub_option(
        CreateCommandOption::new(
            CommandOptionType::Role,
            "role",
            "Role to require, leave empty to allow everyone",
        )
        .required(false),
    )
}

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Configure the bot for this server")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "settings",
            "Show the current settings",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommandGroup,
                "channel",
                "Configure where the bot posts",
            )
            .add_sub_option(channel_subcommand(
                "loot",
                "Set the channel loot piles are posted in",
            ))
            .add_sub_option(channel_subcommand(
                "event",
                "Set the channel events are posted in",
            )),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommandGroup,
                "role",
                "Configure which roles may use the bot",
            )
            .add_sub_option(role_subcommand(
                "organizer",
                "Set the role required to manage events",
            ))
            .add_sub_option(role_subcommand(
                "participant",
                "Set the role required to take part in events",
            )),
        )
}

/// Confirmation text for a settings write.
pub fn setting_changed(label: &str, value: Option<String>) -> String {
    match value {
        Some(value) => format!("{} set to {}.", label, value),
        None => format!("{} cleared.", label),
    }
}

pub async fn run(
    state: &AppState,
    command: &CommandInteraction,
    args: &CommandArgs,
) -> OperationResult<Reply> {
    let guild_id = require_guild(command)?;

    let is_admin = command
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.administrator());
    if !is_admin {
        return Err(AppError::Unauthorized(
            "You must be an administrator to use this command.".to_string(),
        ));
    }

    let service = GuildSettingsService::new(&state.db, state.settings_cache.as_ref());

    match args.path().as_slice() {
        ["settings"] => {
            let settings = service.get(guild_id).await?;
            Ok(Reply::Embed(embed::settings_embed(&settings)))
        }
        ["channel", "loot"] => {
            let channel = args.channel("channel");
            service.set_loot_channel(guild_id, channel).await?;
            Ok(Reply::Message(setting_changed(
                "Loot channel",
                channel.map(embed::channel_mention),
            )))
        }
        ["channel", "event"] => {
            let channel = args.channel("channel");
            service.set_event_channel(guild_id, channel).await?;
            Ok(Reply::Message(setting_changed(
                "Event channel",
                channel.map(embed::channel_mention),
            )))
        }
        ["role", "organizer"] => {
            let role = args.role("role");
            service.set_organizer_role(guild_id, role).await?;
            Ok(Reply::Message(setting_changed(
                "Organizer role",
                role.map(embed::role_mention),
            )))
        }
        ["role", "participant"] => {
            let role = args.role("role");
            service.set_participant_role(guild_id, role).await?;
            Ok(Reply::Message(setting_changed(
                "Participant role",
                role.map(embed::role_mention),
            )))
        }
        path => Err(AppError::InternalError(format!(
            "Unknown /{} subcommand {:?}",
            NAME, path
        ))),
    }
}
