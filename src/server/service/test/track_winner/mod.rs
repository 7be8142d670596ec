use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::track_winner::TrackWinnerRepository,
    error::AppError,
    model::track_winner::{CreateTrackWinnerParams, TeamResult},
    service::track_winner::TrackWinnerService,
};

mod calculate_rating;
mod create;
mod list_by_track;
mod set_results;

/// Registers one team per total on `track_id` and submits each total over two
/// scoring timelines. Teams are created in order, so their ids ascend.
async fn seed_totals(
    db: &DatabaseConnection,
    track_id: i32,
    totals: &[i32],
) -> Result<Vec<entity::track_team::Model>, DbErr> {
    let first = factory::helpers::create_scoring_timeline(db, track_id, 1).await?;
    let second = factory::helpers::create_scoring_timeline(db, track_id, 2).await?;

    let mut teams = Vec::with_capacity(totals.len());
    for total in totals {
        let team = factory::create_track_team(db, track_id).await?;
        factory::create_team_action_status(db, team.id, first.id, total / 2).await?;
        factory::create_team_action_status(db, team.id, second.id, total - total / 2).await?;
        teams.push(team);
    }

    Ok(teams)
}
