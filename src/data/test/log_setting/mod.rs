use crate::data::log_setting::LogSettingRepository;
use entity::prelude::{LogCategory, LogSetting};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find;
mod upsert;
