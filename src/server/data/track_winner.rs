use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::track_winner::{CreateTrackWinnerParams, TrackWinner};

pub struct TrackWinnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrackWinnerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTrackWinnerParams) -> Result<TrackWinner, DbErr> {
        let winner = entity::track_winner::ActiveModel {
            track_id: ActiveValue::Set(params.track_id),
            track_team_id: ActiveValue::Set(params.track_team_id),
            place: ActiveValue::Set(params.place),
            is_awardee: ActiveValue::Set(params.is_awardee),
        }
        .insert(self.db)
        .await?;

        Ok(TrackWinner::from_entity(winner))
    }

    pub async fn get(
        &self,
        track_id: i32,
        track_team_id: i32,
    ) -> Result<Option<TrackWinner>, DbErr> {
        let winner = entity::prelude::TrackWinner::find_by_id((track_id, track_team_id))
            .one(self.db)
            .await?;

        Ok(winner.map(TrackWinner::from_entity))
    }

    /// Gets every standing a team registration holds
    pub async fn get_by_track_team_id(&self, track_team_id: i32) -> Result<Vec<TrackWinner>, DbErr> {
        let winners = entity::prelude::TrackWinner::find()
            .filter(entity::track_winner::Column::TrackTeamId.eq(track_team_id))
            .order_by_asc(entity::track_winner::Column::TrackId)
            .all(self.db)
            .await?;

        Ok(winners.into_iter().map(TrackWinner::from_entity).collect())
    }

    /// Gets a track's standings ordered by place
    pub async fn get_by_track_id(&self, track_id: i32) -> Result<Vec<TrackWinner>, DbErr> {
        let winners = entity::prelude::TrackWinner::find()
            .filter(entity::track_winner::Column::TrackId.eq(track_id))
            .order_by_asc(entity::track_winner::Column::Place)
            .order_by_asc(entity::track_winner::Column::TrackTeamId)
            .all(self.db)
            .await?;

        Ok(winners.into_iter().map(TrackWinner::from_entity).collect())
    }

    pub async fn count_by_track_id(&self, track_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TrackWinner::find()
            .filter(entity::track_winner::Column::TrackId.eq(track_id))
            .count(self.db)
            .await
    }
}
