use crate::server::{data::track::TrackRepository, model::status::LifecycleStatus};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_to_end;
mod get_to_start;
