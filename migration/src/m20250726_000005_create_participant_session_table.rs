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
                    .table(ParticipantSession::Table)
                    .if_not_exists()
                    .col(pk_auto(ParticipantSession::Id))
                    .col(integer(ParticipantSession::EventId))
                    .col(integer_null(ParticipantSession::EventParticipantId))
                    .col(string(ParticipantSession::UserId))
                    .col(string(ParticipantSession::ChannelId))
                    .col(timestamp_with_time_zone(ParticipantSession::StartedAt))
                    .col(timestamp_with_time_zone_null(ParticipantSession::EndedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_participant_session_event_id")
                            .from(ParticipantSession::Table, ParticipantSession::EventId)
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
            .drop_table(Table::drop().table(ParticipantSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ParticipantSession {
    Table,
    Id,
    EventId,
    EventParticipantId,
    UserId,
    ChannelId,
    StartedAt,
    EndedAt,
}
