use sea_orm_migration::{prelude::*, schema::*};

use super::m20250726_000002_create_guild_event_table::GuildEvent;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(EventParticipant::Id))
                    .col(integer(EventParticipant::EventId))
                    .col(string(EventParticipant::UserId))
                    .col(big_integer(EventParticipant::TotalParticipationSeconds).default(0))
                    .col(boolean(EventParticipant::ExcludedFromLoot).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_participant_event_id")
                            .from(EventParticipant::Table, EventParticipant::EventId)
                            .to(GuildEvent::Table, GuildEvent::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventParticipant {
    Table,
    Id,
    EventId,
    UserId,
    TotalParticipationSeconds,
    ExcludedFromLoot,
}
