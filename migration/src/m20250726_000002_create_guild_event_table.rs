use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildEvent::Id))
                    .col(string(GuildEvent::GuildId))
                    .col(string_null(GuildEvent::MessageId))
                    .col(string_null(GuildEvent::OriginChannelId))
                    .col(string_len(GuildEvent::Name, 256))
                    .col(text_null(GuildEvent::Description))
                    .col(integer_null(GuildEvent::MinimumParticipantMinutes))
                    .col(integer_null(GuildEvent::MaximumParticipants))
                    .col(integer(GuildEvent::CurrentState))
                    .col(timestamp_with_time_zone(GuildEvent::CreatedAt))
                    .col(string(GuildEvent::CreatedBy))
                    .col(timestamp_with_time_zone_null(GuildEvent::StartedAt))
                    .col(string_null(GuildEvent::StartedBy))
                    .col(timestamp_with_time_zone_null(GuildEvent::CompletedAt))
                    .col(string_null(GuildEvent::CompletedBy))
                    .col(json(GuildEvent::ParticipantChannels))
                    .to_owned(),
            )
            .await?;

        // Events are always listed per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_guild_event_guild_id")
                    .table(GuildEvent::Table)
                    .col(GuildEvent::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_guild_event_guild_id")
                    .table(GuildEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GuildEvent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildEvent {
    Table,
    Id,
    GuildId,
    MessageId,
    OriginChannelId,
    Name,
    Description,
    MinimumParticipantMinutes,
    MaximumParticipants,
    CurrentState,
    CreatedAt,
    CreatedBy,
    StartedAt,
    StartedBy,
    CompletedAt,
    CompletedBy,
    ParticipantChannels,
}
