use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    /// Discord guild id, assigned by Discord rather than generated.
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    pub event_channel_id: Option<String>,
    pub loot_channel_id: Option<String>,
    pub event_organizer_role_id: Option<String>,
    pub event_participant_role_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
