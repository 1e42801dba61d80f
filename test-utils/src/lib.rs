//! Loot Goblin Test Utils
//!
//! Provides shared testing utilities for the loot goblin bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases and factories for
//! seeding guild settings and events.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for inserting entities with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildSettings;
//!
//! #[tokio::test]
//! async fn reads_settings() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildSettings)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
