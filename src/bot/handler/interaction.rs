//! Interaction handler for slash commands.

use serenity::all::{CommandInteraction, Context, Interaction};

use crate::{
    bot::command::{self, respond::Reply},
    error::operation::{status_of, OperationStatus},
    state::AppState,
};

/// Handles an incoming interaction.
///
/// Only slash commands are processed. The response is deferred first so slow storage or
/// Discord calls cannot run past the interaction deadline; the outcome then replaces the
/// deferred response.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for the HTTP client
/// - `interaction` - The interaction received from the gateway
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer /{}: {}", command.data.name, e);
        return;
    }

    let result = command::dispatch(state, &ctx, &command).await;
    log_outcome(&command, status_of(&result));

    let reply = match result {
        Ok(reply) => reply,
        Err(e) => Reply::Message(e.user_message()),
    };

    if let Err(e) = command
        .edit_response(&ctx.http, reply.into_response())
        .await
    {
        tracing::error!("Failed to respond to /{}: {}", command.data.name, e);
    }
}

fn log_outcome(command: &CommandInteraction, status: OperationStatus) {
    tracing::info!(
        "/{} by {} in guild {:?}: {}",
        command.data.name,
        command.user.id,
        command.guild_id,
        status
    );
}
