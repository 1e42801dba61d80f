//! Ready event handler for bot initialization.
//!
//! Fired once the gateway handshake completes. Slash commands are (re)registered here so
//! a deploy with changed command definitions takes effect on the next connect.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged and do not stop the bot; previously registered
/// commands keep working.
///
/// # Arguments
/// - `ctx` - Discord context for the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => {
            tracing::info!("Registered {} global commands", commands.len());
        }
        Err(e) => {
            tracing::error!("Failed to register global commands: {}", e);
        }
    }
}
