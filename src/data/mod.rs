//! Database repository layer.
//!
//! Repositories own every query against the settings and event tables. They use SeaORM
//! entity models internally and hand domain models back to the service layer, so
//! snowflake parsing happens once, here.

pub mod guild_event;
pub mod guild_settings;

#[cfg(test)]
mod test;
