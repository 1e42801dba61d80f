use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{LootRollType, LootStatus, LootType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "loot_pile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub message_id: Option<String>,
    pub origin_channel_id: Option<String>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub current_status: LootStatus,
    pub loot_type: LootType,
    pub roll_type: LootRollType,
    pub created_at: DateTimeUtc,
    pub created_by: String,
    pub completed_at: Option<DateTimeUtc>,
    pub completed_by: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guild_event::Entity",
        from = "Column::EventId",
        to = "super::guild_event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    GuildEvent,
}

impl Related<super::guild_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GuildEvent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
