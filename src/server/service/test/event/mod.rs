use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::{
        event::{CreateEventParams, UpdateEventParams},
        status::LifecycleStatus,
    },
    service::event::EventService,
};

mod lifecycle;
mod update;
