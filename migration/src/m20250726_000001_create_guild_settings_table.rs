use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildSettings::Table)
                    .if_not_exists()
                    .col(string(GuildSettings::GuildId).primary_key())
                    .col(string_null(GuildSettings::EventChannelId))
                    .col(string_null(GuildSettings::LootChannelId))
                    .col(string_null(GuildSettings::EventOrganizerRoleId))
                    .col(string_null(GuildSettings::EventParticipantRoleId))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildSettings {
    Table,
    GuildId,
    EventChannelId,
    LootChannelId,
    EventOrganizerRoleId,
    EventParticipantRoleId,
}
