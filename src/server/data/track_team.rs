use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::track::{RegisterTeamParams, TrackTeam, UpdateTrackTeamParams};

/// Team registrations on tracks.
///
/// Teams are addressed by `(track_id, team_id)` from the API; the registration `id` is
/// what results and winners reference as `track_team_id`.
pub struct TrackTeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrackTeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers an active team on a track
    pub async fn create(&self, params: RegisterTeamParams) -> Result<TrackTeam, DbErr> {
        let track_team = entity::track_team::ActiveModel {
            team_id: ActiveValue::Set(params.team_id),
            track_id: ActiveValue::Set(params.track_id),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TrackTeam::from_entity(track_team))
    }

    pub async fn get_by_track_id(&self, track_id: i32) -> Result<Vec<TrackTeam>, DbErr> {
        let track_teams = entity::prelude::TrackTeam::find()
            .filter(entity::track_team::Column::TrackId.eq(track_id))
            .order_by_asc(entity::track_team::Column::Id)
            .all(self.db)
            .await?;

        Ok(track_teams.into_iter().map(TrackTeam::from_entity).collect())
    }

    /// Finds a team's registration on a track
    pub async fn find(&self, track_id: i32, team_id: i32) -> Result<Option<TrackTeam>, DbErr> {
        let track_team = entity::prelude::TrackTeam::find()
            .filter(entity::track_team::Column::TrackId.eq(track_id))
            .filter(entity::track_team::Column::TeamId.eq(team_id))
            .one(self.db)
            .await?;

        Ok(track_team.map(TrackTeam::from_entity))
    }

    pub async fn update(&self, params: UpdateTrackTeamParams) -> Result<Option<TrackTeam>, DbErr> {
        let Some(track_team) = entity::prelude::TrackTeam::find()
            .filter(entity::track_team::Column::TrackId.eq(params.track_id))
            .filter(entity::track_team::Column::TeamId.eq(params.team_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::track_team::ActiveModel = track_team.clone().into();

        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }

        let updated = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            track_team
        };

        Ok(Some(TrackTeam::from_entity(updated)))
    }

    pub async fn delete(&self, track_id: i32, team_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TrackTeam::delete_many()
            .filter(entity::track_team::Column::TrackId.eq(track_id))
            .filter(entity::track_team::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
