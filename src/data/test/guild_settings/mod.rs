use crate::{data::guild_settings::GuildSettingsRepository, model::guild_settings::SettingsField};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::guild_settings::GuildSettingsFactory};

mod set_field;
