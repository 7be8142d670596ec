//! Track team factory for registering test teams on tracks.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for registering a team on a track.
///
/// `team_id` defaults to a unique value; registrations default to active.
pub struct TrackTeamFactory<'a> {
    db: &'a DatabaseConnection,
    team_id: i32,
    track_id: i32,
    is_active: bool,
}

impl<'a> TrackTeamFactory<'a> {
    /// Creates a new TrackTeamFactory for the given track.
    pub fn new(db: &'a DatabaseConnection, track_id: i32) -> Self {
        Self {
            db,
            team_id: next_id() as i32,
            track_id,
            is_active: true,
        }
    }

    /// Sets the external team id.
    pub fn team_id(mut self, team_id: i32) -> Self {
        self.team_id = team_id;
        self
    }

    /// Sets whether the registration is active.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the track team entity into the database.
    pub async fn build(self) -> Result<entity::track_team::Model, DbErr> {
        entity::track_team::ActiveModel {
            id: ActiveValue::NotSet,
            team_id: ActiveValue::Set(self.team_id),
            track_id: ActiveValue::Set(self.track_id),
            is_active: ActiveValue::Set(self.is_active),
        }
        .insert(self.db)
        .await
    }
}

/// Registers a new active team on the specified track.
pub async fn create_track_team(
    db: &DatabaseConnection,
    track_id: i32,
) -> Result<entity::track_team::Model, DbErr> {
    TrackTeamFactory::new(db, track_id).build().await
}
