use crate::server::data::timeline::TimelineRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_scoring;
mod get_by_track_id;
mod max_count_num;
