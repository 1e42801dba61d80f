//! `/event` command: event creation, lifecycle and participant channels.
//!
//! Every subcommand passes the organizer role check before reaching the event service.

use serenity::all::{
    ChannelId, ChannelType, CommandInteraction, CommandOptionType, Context, CreateCommand,
    CreateCommandOption, CreateMessage, EditMessage, MessageId,
};

use crate::{
    bot::{
        command::{member_roles, options::CommandArgs, require_guild, respond::Reply},
        embed,
    },
    error::{operation::OperationResult, AppError},
    middleware::role::{RoleGuard, RoleRequirement},
    model::guild_event::{CreateGuildEventParams, EventStatus, EventTransition, GuildEvent},
    service::{guild_event::GuildEventService, guild_settings::GuildSettingsService},
    state::AppState,
};

pub const NAME: &str = "event";

/// Subcommand name of a lifecycle transition.
pub fn transition_name(transition: EventTransition) -> &'static str {
    match transition {
        EventTransition::Start => "start",
        EventTransition::Pause => "pause",
        EventTransition::Resume => "resume",
        EventTransition::Complete => "complete",
        EventTransition::Cancel => "cancel",
    }
}

fn transition_description(transition: EventTransition) -> &'static str {
    match transition {
        EventTransition::Start => "Start tracking an event",
        EventTransition::Pause => "Pause tracking an event",
        EventTransition::Resume => "Resume tracking a paused event",
        EventTransition::Complete => "Finish an event",
        EventTransition::Cancel => "Cancel an event",
    }
}

pub fn parse_transition(name: &str) -> Option<EventTransition> {
    EventTransition::ALL
        .into_iter()
        .find(|&t| transition_name(t) == name)
}

/// Parses the `/event list` status filter.
pub fn parse_status(name: &str) -> Option<EventStatus> {
    use sea_orm::Iterable;

    EventStatus::iter().find(|status| status.as_str().eq_ignore_ascii_case(name))
}

fn event_id_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, "event_id", "Id of the event")
        .min_int_value(1)
        .required(true)
}

fn channel_option(required: bool) -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::Channel,
        "channel",
        "Voice channel whose members take part",
    )
    .channel_types(vec![ChannelType::Voice, ChannelType::Stage])
    .required(required)
}

pub fn definition() -> CreateCommand {
    use sea_orm::Iterable;

    let create = CreateCommandOption::new(
        CommandOptionType::SubCommand,
        "create",
        "Create a new event",
    )
    .add_sub_option(
        CreateCommandOption::new(CommandOptionType::String, "name", "Name of the event")
            .required(true),
    )
    .add_sub_option(CreateCommandOption::new(
        CommandOptionType::String,
        "description",
        "What the event is about",
    ))
    .add_sub_option(CreateCommandOption::new(
        CommandOptionType::Integer,
        "min_minutes",
        "Minutes a member must take part to count",
    ))
    .add_sub_option(CreateCommandOption::new(
        CommandOptionType::Integer,
        "max_participants",
        "Maximum number of participants",
    ));

    let mut status = CreateCommandOption::new(
        CommandOptionType::String,
        "status",
        "Only show events in this state",
    );
    for state in EventStatus::iter() {
        status = status.add_string_choice(state.as_str(), state.as_str());
    }

    let channel = CreateCommandOption::new(
        CommandOptionType::SubCommandGroup,
        "channel",
        "Manage the channels tracked for an event",
    )
    .add_sub_option(
        CreateCommandOption::new(CommandOptionType::SubCommand, "add", "Track a channel")
            .add_sub_option(event_id_option())
            .add_sub_option(channel_option(true)),
    )
    .add_sub_option(
        CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "remove",
            "Stop tracking a channel",
        )
        .add_sub_option(event_id_option())
        .add_sub_option(channel_option(true)),
    )
    .add_sub_option(
        CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "Show the tracked channels",
        )
        .add_sub_option(event_id_option()),
    );

    let mut command = CreateCommand::new(NAME)
        .description("Organize guild events")
        .add_option(create);

    for transition in EventTransition::ALL {
        let name = transition_name(transition);
        command = command.add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                name,
                transition_description(transition),
            )
            .add_sub_option(event_id_option()),
        );
    }

    command
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "list", "List events")
                .add_sub_option(status),
        )
        .add_option(channel)
}

pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    args: &CommandArgs,
) -> OperationResult<Reply> {
    let guard = RoleGuard::new(&state.db, state.settings_cache.as_ref());
    guard
        .require(
            command.guild_id.map(|id| id.get()),
            &member_roles(command),
            RoleRequirement::EventOrganizer,
        )
        .await?;

    let guild_id = require_guild(command)?;
    let service = GuildEventService::new(&state.db);

    match args.path().as_slice() {
        ["create"] => create(state, ctx, command, args, guild_id).await,
        ["list"] => {
            let status = args.string("status").and_then(parse_status);
            let events = service.list_for_guild(guild_id, status).await?;
            Ok(Reply::Message(event_list(&events, status)))
        }
        ["channel", "add"] => {
            let event = service.get_in_guild(guild_id, args.event_id()?).await?;
            let channel_id = args.required("channel", args.channel("channel"))?;
            service
                .add_participant_channel(event.id, channel_id)
                .await?;
            Ok(Reply::Message(format!(
                "{} is now tracked for **{}**.",
                embed::channel_mention(channel_id),
                event.name
            )))
        }
        ["channel", "remove"] => {
            let event = service.get_in_guild(guild_id, args.event_id()?).await?;
            let channel_id = args.required("channel", args.channel("channel"))?;
            service
                .remove_participant_channel(event.id, channel_id)
                .await?;
            Ok(Reply::Message(format!(
                "{} is no longer tracked for **{}**.",
                embed::channel_mention(channel_id),
                event.name
            )))
        }
        ["channel", "list"] => {
            let event = service.get_in_guild(guild_id, args.event_id()?).await?;
            let channels = service.get_participant_channels(event.id).await?;
            Ok(Reply::Message(format!(
                "Channels tracked for **{}**:\n{}",
                event.name,
                embed::channel_list(&channels)
            )))
        }
        [name] => match parse_transition(name) {
            Some(transition) => {
                run_transition(state, ctx, command, args, guild_id, transition).await
            }
            None => Err(unknown_subcommand(&[*name])),
        },
        path => Err(unknown_subcommand(path)),
    }
}

fn unknown_subcommand(path: &[&str]) -> AppError {
    AppError::InternalError(format!("Unknown /{} subcommand {:?}", NAME, path))
}

/// Renders `/event list` output.
pub fn event_list(events: &[GuildEvent], status: Option<EventStatus>) -> String {
    if events.is_empty() {
        return match status {
            Some(status) => format!("No {} events.", status.as_str().to_lowercase()),
            None => "No events yet.".to_string(),
        };
    }

    events
        .iter()
        .map(|event| {
            format!(
                "`#{}` **{}** - {}",
                event.id,
                event.name,
                event.current_state.as_str()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Creates an event and posts its announcement.
///
/// The announcement goes to the guild's event channel, or the invoking channel when none
/// is configured. A failed post keeps the event and reports the failure in the reply.
async fn create(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    args: &CommandArgs,
    guild_id: u64,
) -> OperationResult<Reply> {
    let service = GuildEventService::new(&state.db);
    let settings_service = GuildSettingsService::new(&state.db, state.settings_cache.as_ref());

    let name = args.required("name", args.string("name"))?;
    let event = service
        .create(CreateGuildEventParams {
            guild_id,
            created_by: command.user.id.get(),
            name: name.to_string(),
            description: args.string("description").map(str::to_string),
            minimum_participant_minutes: args.small_integer("min_minutes")?,
            maximum_participants: args.small_integer("max_participants")?,
        })
        .await?;

    let settings = settings_service.get(guild_id).await?;
    let channel_id = settings
        .event_channel_id
        .unwrap_or_else(|| command.channel_id.get());

    let message = ChannelId::new(channel_id)
        .send_message(
            &ctx.http,
            CreateMessage::new().embed(embed::event_embed(&event)?),
        )
        .await;

    match message {
        Ok(message) => {
            service
                .set_event_message(event.id, message.id.get(), channel_id)
                .await?;
            Ok(Reply::Message(format!(
                "Created event **{}** (`#{}`): {}",
                event.name,
                event.id,
                message.link()
            )))
        }
        Err(e) => {
            tracing::error!(
                "Failed to post event {} in channel {}: {}",
                event.id,
                channel_id,
                e
            );
            Ok(Reply::Message(format!(
                "Created event **{}** (`#{}`), but it could not be posted in {}.",
                event.name,
                event.id,
                embed::channel_mention(channel_id)
            )))
        }
    }
}

async fn run_transition(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
    args: &CommandArgs,
    guild_id: u64,
    transition: EventTransition,
) -> OperationResult<Reply> {
    let service = GuildEventService::new(&state.db);

    let event = service.get_in_guild(guild_id, args.event_id()?).await?;
    let event = service
        .transition(event.id, transition, command.user.id.get())
        .await?;

    refresh_announcement(ctx, &event).await;

    Ok(Reply::Message(format!(
        "Event **{}** has been {}.",
        event.name,
        transition.past_tense()
    )))
}

/// Re-renders a posted announcement after a state change.
///
/// The state change is already persisted, so failures are only logged.
async fn refresh_announcement(ctx: &Context, event: &GuildEvent) {
    let Some((channel_id, message_id)) = event.published_at() else {
        return;
    };

    let embed = match embed::event_embed(event) {
        Ok(embed) => embed,
        Err(e) => {
            tracing::error!("Failed to render event {}: {}", event.id, e);
            return;
        }
    };

    if let Err(e) = ChannelId::new(channel_id)
        .edit_message(
            &ctx.http,
            MessageId::new(message_id),
            EditMessage::new().embed(embed),
        )
        .await
    {
        tracing::warn!(
            "Failed to update announcement of event {} ({}/{}): {}",
            event.id,
            channel_id,
            message_id,
            e
        );
    }
}
