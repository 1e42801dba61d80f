//! Discord front-end.
//!
//! Registers the `/admin` and `/event` slash commands, routes interactions to the
//! settings and event services and renders their results back to Discord. All replies
//! are ephemeral; event announcements are posted as regular messages.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. Slash command interactions are delivered regardless of
//! intents, and member roles arrive with each interaction.

pub mod command;
pub mod embed;
pub mod handler;
pub mod start;
