//! SeaORM entity definitions for the loot goblin database.
//!
//! One module per table plus the shared active enums. Discord snowflakes are stored
//! as strings and converted to `u64` by the repository layer.

pub mod prelude;

pub mod event_participant;
pub mod guild_event;
pub mod guild_settings;
pub mod loot_pile;
pub mod participant_session;
pub mod sea_orm_active_enums;
