//! Track winner factory for inserting standings directly.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a winner row without any of the service-level checks.
///
/// # Arguments
/// - `db` - Database connection
/// - `track_id` - Track the standing belongs to
/// - `track_team_id` - Registration that placed
/// - `place` - 0-based rank
/// - `is_awardee` - Whether the team qualified for an award
pub async fn create_track_winner(
    db: &DatabaseConnection,
    track_id: i32,
    track_team_id: i32,
    place: i32,
    is_awardee: bool,
) -> Result<entity::track_winner::Model, DbErr> {
    entity::track_winner::ActiveModel {
        track_id: ActiveValue::Set(track_id),
        track_team_id: ActiveValue::Set(track_team_id),
        place: ActiveValue::Set(place),
        is_awardee: ActiveValue::Set(is_awardee),
    }
    .insert(db)
    .await
}
