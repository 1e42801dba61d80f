pub use sea_orm_migration::prelude::*;

mod m20250726_000001_create_guild_settings_table;
mod m20250726_000002_create_guild_event_table;
mod m20250726_000003_create_loot_pile_table;
mod m20250726_000004_create_event_participant_table;
mod m20250726_000005_create_participant_session_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250726_000001_create_guild_settings_table::Migration),
            Box::new(m20250726_000002_create_guild_event_table::Migration),
            Box::new(m20250726_000003_create_loot_pile_table::Migration),
            Box::new(m20250726_000004_create_event_participant_table::Migration),
            Box::new(m20250726_000005_create_participant_session_table::Migration),
        ]
    }
}
