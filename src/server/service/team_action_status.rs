use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::team_action_status::TeamActionStatusRepository,
    error::AppError,
    model::team_action_status::{
        CreateTeamActionStatusParams, TeamActionStatus, UpdateTeamActionStatusParams,
    },
};

pub struct TeamActionStatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamActionStatusService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Results submitted by one track team across all timelines
    pub async fn list_by_team(&self, track_team_id: i32) -> Result<Vec<TeamActionStatus>, AppError> {
        let statuses = TeamActionStatusRepository::new(self.db)
            .get_by_track_team_id(track_team_id)
            .await?;

        Ok(statuses)
    }

    /// Results submitted for one timeline by all teams
    pub async fn list_by_timeline(&self, timeline_id: i32) -> Result<Vec<TeamActionStatus>, AppError> {
        let statuses = TeamActionStatusRepository::new(self.db)
            .get_by_timeline_id(timeline_id)
            .await?;

        Ok(statuses)
    }

    pub async fn get(
        &self,
        timeline_id: i32,
        track_team_id: i32,
    ) -> Result<TeamActionStatus, AppError> {
        TeamActionStatusRepository::new(self.db)
            .get(timeline_id, track_team_id)
            .await?
            .ok_or_else(|| status_not_found(timeline_id, track_team_id))
    }

    /// Records a result; a team has at most one result per timeline.
    pub async fn create(
        &self,
        params: CreateTeamActionStatusParams,
    ) -> Result<TeamActionStatus, AppError> {
        let txn = self.db.begin().await?;
        let status = TeamActionStatusRepository::new(&txn).create(params).await?;
        txn.commit().await?;

        Ok(status)
    }

    pub async fn update(
        &self,
        params: UpdateTeamActionStatusParams,
    ) -> Result<TeamActionStatus, AppError> {
        let (timeline_id, track_team_id) = (params.timeline_id, params.track_team_id);

        let txn = self.db.begin().await?;
        let status = TeamActionStatusRepository::new(&txn)
            .update(params)
            .await?
            .ok_or_else(|| status_not_found(timeline_id, track_team_id))?;
        txn.commit().await?;

        Ok(status)
    }

    pub async fn delete(&self, timeline_id: i32, track_team_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !TeamActionStatusRepository::new(&txn)
            .delete(timeline_id, track_team_id)
            .await?
        {
            return Err(status_not_found(timeline_id, track_team_id));
        }

        txn.commit().await?;

        Ok(())
    }
}

fn status_not_found(timeline_id: i32, track_team_id: i32) -> AppError {
    AppError::NotFound(format!(
        "No result of team {} for timeline {}",
        track_team_id, timeline_id
    ))
}
