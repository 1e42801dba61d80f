use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use entity::guild_event::{ParticipantChannel, ParticipantChannels};

use crate::model::guild_event::{
    AuditStamp, CreateGuildEventParams, EventStatus, GuildEvent, UpdateEventStateParams,
};

pub struct GuildEventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildEventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new event in the `Created` state with no participant channels.
    ///
    /// # Arguments
    /// - `params` - Already validated creation parameters
    ///
    /// # Returns
    /// - `Ok(GuildEvent)` - The created event with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateGuildEventParams) -> Result<GuildEvent, DbErr> {
        let event = entity::guild_event::ActiveModel {
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            message_id: ActiveValue::Set(None),
            origin_channel_id: ActiveValue::Set(None),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            minimum_participant_minutes: ActiveValue::Set(params.minimum_participant_minutes),
            maximum_participants: ActiveValue::Set(params.maximum_participants),
            current_state: ActiveValue::Set(EventStatus::Created),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(params.created_by.to_string()),
            started_at: ActiveValue::Set(None),
            started_by: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            completed_by: ActiveValue::Set(None),
            participant_channels: ActiveValue::Set(ParticipantChannels::default()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        GuildEvent::from_entity(event)
    }

    /// Gets an event by id.
    ///
    /// # Returns
    /// - `Ok(Some(GuildEvent))` - Event found
    /// - `Ok(None)` - No event with that id
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<GuildEvent>, DbErr> {
        entity::prelude::GuildEvent::find_by_id(id)
            .one(self.db)
            .await?
            .map(GuildEvent::from_entity)
            .transpose()
    }

    /// Gets a guild's events, newest first.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `status` - Only return events in this state, or all events when `None`
    pub async fn get_by_guild(
        &self,
        guild_id: u64,
        status: Option<EventStatus>,
    ) -> Result<Vec<GuildEvent>, DbErr> {
        let mut query = entity::prelude::GuildEvent::find()
            .filter(entity::guild_event::Column::GuildId.eq(guild_id.to_string()));

        if let Some(status) = status {
            query = query.filter(entity::guild_event::Column::CurrentState.eq(status));
        }

        query
            .order_by_desc(entity::guild_event::Column::CreatedAt)
            .order_by_desc(entity::guild_event::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(GuildEvent::from_entity)
            .collect()
    }

    /// Moves an event to a new state if it is still in the expected one.
    ///
    /// The state check and the write happen in a single `UPDATE ... WHERE`, so of two
    /// racing transitions from the same state only one is applied.
    ///
    /// # Returns
    /// - `Ok(true)` - The row was updated
    /// - `Ok(false)` - The event is missing or no longer in `params.expected`
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_state(&self, params: UpdateEventStateParams) -> Result<bool, DbErr> {
        use entity::guild_event::Column;

        let mut update = entity::prelude::GuildEvent::update_many()
            .col_expr(Column::CurrentState, Expr::value(params.target))
            .filter(Column::Id.eq(params.id))
            .filter(Column::CurrentState.eq(params.expected));

        match params.stamp {
            Some(AuditStamp::Started { at, by }) => {
                update = update
                    .col_expr(Column::StartedAt, Expr::value(at))
                    .col_expr(Column::StartedBy, Expr::value(by.to_string()));
            }
            Some(AuditStamp::Completed { at, by }) => {
                update = update
                    .col_expr(Column::CompletedAt, Expr::value(at))
                    .col_expr(Column::CompletedBy, Expr::value(by.to_string()));
            }
            None => {}
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }

    /// Records where the event is displayed.
    ///
    /// # Returns
    /// - `Ok(true)` - Event updated
    /// - `Ok(false)` - No event with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_message(
        &self,
        id: i32,
        channel_id: u64,
        message_id: u64,
    ) -> Result<bool, DbErr> {
        use entity::guild_event::Column;

        let result = entity::prelude::GuildEvent::update_many()
            .col_expr(Column::OriginChannelId, Expr::value(channel_id.to_string()))
            .col_expr(Column::MessageId, Expr::value(message_id.to_string()))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Replaces the participant channel list.
    ///
    /// Callers are responsible for uniqueness; the list is stored as given.
    ///
    /// # Returns
    /// - `Ok(true)` - Event updated
    /// - `Ok(false)` - No event with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_channels(&self, id: i32, channel_ids: &[u64]) -> Result<bool, DbErr> {
        use entity::guild_event::Column;

        let channels = ParticipantChannels(
            channel_ids
                .iter()
                .map(|&channel_id| ParticipantChannel { channel_id })
                .collect(),
        );

        let result = entity::prelude::GuildEvent::update_many()
            .col_expr(Column::ParticipantChannels, Expr::value(channels))
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
