use crate::server::{
    data::event::EventRepository,
    model::{
        event::{CreateEventParams, UpdateEventParams},
        status::LifecycleStatus,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_to_end;
mod get_to_start;
mod update;
