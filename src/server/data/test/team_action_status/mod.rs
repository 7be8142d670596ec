use crate::server::{
    data::team_action_status::TeamActionStatusRepository,
    model::{
        team_action_status::UpdateTeamActionStatusParams, track_winner::TeamResult,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod sum_results_by_track;
mod update;
