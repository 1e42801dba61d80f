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
                    .table(LootPile::Table)
                    .if_not_exists()
                    .col(pk_auto(LootPile::Id))
                    .col(integer(LootPile::EventId))
                    .col(string_null(LootPile::MessageId))
                    .col(string_null(LootPile::OriginChannelId))
                    .col(string_len(LootPile::Name, 256))
                    .col(text_null(LootPile::Description))
                    .col(integer(LootPile::CurrentStatus))
                    .col(integer(LootPile::LootType))
                    .col(integer(LootPile::RollType))
                    .col(timestamp_with_time_zone(LootPile::CreatedAt))
                    .col(string(LootPile::CreatedBy))
                    .col(timestamp_with_time_zone_null(LootPile::CompletedAt))
                    .col(string_null(LootPile::CompletedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_loot_pile_event_id")
                            .from(LootPile::Table, LootPile::EventId)
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
            .drop_table(Table::drop().table(LootPile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LootPile {
    Table,
    Id,
    EventId,
    MessageId,
    OriginChannelId,
    Name,
    Description,
    CurrentStatus,
    LootType,
    RollType,
    CreatedAt,
    CreatedBy,
    CompletedAt,
    CompletedBy,
}
