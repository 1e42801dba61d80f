//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let settings = factory::create_guild_settings(&db).await?;
//!     let event = factory::guild_event::GuildEventFactory::new(&db, 42)
//!         .state(EventStatus::Active)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_settings` - Create guild settings rows
//! - `guild_event` - Create guild events in any lifecycle state
//! - `event_participant` - Create participation records owned by an event
//! - `helpers` - Unique id generation

pub mod event_participant;
pub mod guild_event;
pub mod guild_settings;
pub mod helpers;

pub use event_participant::create_event_participant;
pub use guild_event::create_guild_event;
pub use guild_settings::create_guild_settings;
