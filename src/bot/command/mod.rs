//! Slash command definitions and dispatch.

use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    error::{operation::OperationResult, AppError},
    state::AppState,
};

pub mod admin;
pub mod event;
pub mod options;
pub mod respond;

use options::CommandArgs;
use respond::Reply;

/// Every command registered with Discord.
pub fn definitions() -> Vec<CreateCommand> {
    vec![admin::definition(), event::definition()]
}

/// Routes a slash command to its handler.
///
/// # Returns
/// - `Ok(Reply)` - What to show the invoking user
/// - `Err(AppError)` - Failure to report through its user message
pub async fn dispatch(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> OperationResult<Reply> {
    let args = CommandArgs::from_resolved(command.data.options());

    match command.data.name.as_str() {
        admin::NAME => admin::run(state, command, &args).await,
        event::NAME => event::run(state, ctx, command, &args).await,
        other => Err(AppError::InternalError(format!(
            "Received unregistered command /{}",
            other
        ))),
    }
}

/// Guild id of the interaction, or a denial when used outside of a guild.
pub fn require_guild(command: &CommandInteraction) -> OperationResult<u64> {
    command.guild_id.map(|id| id.get()).ok_or_else(|| {
        AppError::Unauthorized("This command can only be used within a guild.".to_string())
    })
}

/// Role ids of the invoking member, empty outside of guilds.
pub fn member_roles(command: &CommandInteraction) -> Vec<u64> {
    command
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default()
}
