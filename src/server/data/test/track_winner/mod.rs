use crate::server::data::track_winner::TrackWinnerRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_track_id;
