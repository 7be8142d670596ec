use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::timeline::CreateTimelineParams, service::timeline::TimelineService,
};

mod create;
mod max_value;

fn new_timeline(track_id: i32, title: &str, is_scoring: bool) -> CreateTimelineParams {
    CreateTimelineParams {
        title: title.to_string(),
        description: String::new(),
        deadline: Utc::now(),
        is_blocking: false,
        is_scoring,
        status: "open".to_string(),
        track_id,
    }
}
