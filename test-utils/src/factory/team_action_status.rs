//! Team action status factory for submitting test results.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a team's result for one timeline.
///
/// # Arguments
/// - `db` - Database connection
/// - `track_team_id` - Registration the result belongs to
/// - `timeline_id` - Timeline the result was submitted for
/// - `result_value` - Score contributed by this submission
///
/// # Returns
/// - `Ok(entity::team_action_status::Model)` - Created result
/// - `Err(DbErr)` - Database error during insert, including a duplicate (team, timeline) pair
pub async fn create_team_action_status(
    db: &DatabaseConnection,
    track_team_id: i32,
    timeline_id: i32,
    result_value: i32,
) -> Result<entity::team_action_status::Model, DbErr> {
    entity::team_action_status::ActiveModel {
        track_team_id: ActiveValue::Set(track_team_id),
        timeline_id: ActiveValue::Set(timeline_id),
        result_value: ActiveValue::Set(result_value),
        resolution_link: ActiveValue::Set(format!(
            "https://example.com/results/{}/{}",
            track_team_id, timeline_id
        )),
        completed_at: ActiveValue::Set(Utc::now()),
        notes: ActiveValue::Set(String::new()),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::{create_completed_scored_track, create_scoring_timeline};
    use crate::factory::track_team::create_track_team;

    #[tokio::test]
    async fn rejects_duplicate_submission() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_scoring_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let track = create_completed_scored_track(db).await?;
        let team = create_track_team(db, track.id).await?;
        let timeline = create_scoring_timeline(db, track.id, 1).await?;

        create_team_action_status(db, team.id, timeline.id, 10).await?;
        let duplicate = create_team_action_status(db, team.id, timeline.id, 20).await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
