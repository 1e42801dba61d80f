use crate::{
    data::guild_event::GuildEventRepository,
    model::guild_event::{AuditStamp, CreateGuildEventParams, EventStatus, UpdateEventStateParams},
};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait, ModelTrait};
use test_utils::{builder::TestBuilder, factory, factory::guild_event::GuildEventFactory};

mod cascade;
mod get_by_guild;
mod set_message;
