//! Domain models and parameter types.
//!
//! Entity models are converted into these types at the repository boundary, turning
//! string snowflakes into `u64` and the embedded channel list into plain ids. Services
//! and the bot layer work only with these types.

pub mod guild_event;
pub mod guild_settings;
