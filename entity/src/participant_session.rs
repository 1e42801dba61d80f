use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "participant_session")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub event_participant_id: Option<i32>,
    pub user_id: String,
    pub channel_id: String,
    pub started_at: DateTimeUtc,
    pub ended_at: Option<DateTimeUtc>,
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
