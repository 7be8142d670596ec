use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    team_action_status::{
        CreateTeamActionStatusParams, TeamActionStatus, UpdateTeamActionStatusParams,
    },
    track_winner::TeamResult,
};

pub struct TeamActionStatusRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamActionStatusRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a team's result for a timeline
    ///
    /// Fails with a database error if the team already has a result for that timeline.
    pub async fn create(
        &self,
        params: CreateTeamActionStatusParams,
    ) -> Result<TeamActionStatus, DbErr> {
        let status = entity::team_action_status::ActiveModel {
            track_team_id: ActiveValue::Set(params.track_team_id),
            timeline_id: ActiveValue::Set(params.timeline_id),
            result_value: ActiveValue::Set(params.result_value),
            resolution_link: ActiveValue::Set(params.resolution_link),
            completed_at: ActiveValue::Set(params.completed_at),
            notes: ActiveValue::Set(params.notes),
        }
        .insert(self.db)
        .await?;

        Ok(TeamActionStatus::from_entity(status))
    }

    pub async fn get(
        &self,
        timeline_id: i32,
        track_team_id: i32,
    ) -> Result<Option<TeamActionStatus>, DbErr> {
        let status = entity::prelude::TeamActionStatus::find_by_id((track_team_id, timeline_id))
            .one(self.db)
            .await?;

        Ok(status.map(TeamActionStatus::from_entity))
    }

    pub async fn get_by_track_team_id(
        &self,
        track_team_id: i32,
    ) -> Result<Vec<TeamActionStatus>, DbErr> {
        let statuses = entity::prelude::TeamActionStatus::find()
            .filter(entity::team_action_status::Column::TrackTeamId.eq(track_team_id))
            .order_by_asc(entity::team_action_status::Column::TimelineId)
            .all(self.db)
            .await?;

        Ok(statuses
            .into_iter()
            .map(TeamActionStatus::from_entity)
            .collect())
    }

    pub async fn get_by_timeline_id(&self, timeline_id: i32) -> Result<Vec<TeamActionStatus>, DbErr> {
        let statuses = entity::prelude::TeamActionStatus::find()
            .filter(entity::team_action_status::Column::TimelineId.eq(timeline_id))
            .order_by_asc(entity::team_action_status::Column::TrackTeamId)
            .all(self.db)
            .await?;

        Ok(statuses
            .into_iter()
            .map(TeamActionStatus::from_entity)
            .collect())
    }

    pub async fn update(
        &self,
        params: UpdateTeamActionStatusParams,
    ) -> Result<Option<TeamActionStatus>, DbErr> {
        let Some(status) =
            entity::prelude::TeamActionStatus::find_by_id((params.track_team_id, params.timeline_id))
                .one(self.db)
                .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::team_action_status::ActiveModel = status.clone().into();

        if let Some(result_value) = params.result_value {
            active_model.result_value = ActiveValue::Set(result_value);
        }
        if let Some(resolution_link) = params.resolution_link {
            active_model.resolution_link = ActiveValue::Set(resolution_link);
        }
        if let Some(completed_at) = params.completed_at {
            active_model.completed_at = ActiveValue::Set(completed_at);
        }
        if let Some(notes) = params.notes {
            active_model.notes = ActiveValue::Set(notes);
        }

        let updated = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            status
        };

        Ok(Some(TeamActionStatus::from_entity(updated)))
    }

    pub async fn delete(&self, timeline_id: i32, track_team_id: i32) -> Result<bool, DbErr> {
        let result =
            entity::prelude::TeamActionStatus::delete_by_id((track_team_id, timeline_id))
                .exec(self.db)
                .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sums `result_value` per team across every timeline of a track
    ///
    /// Rows come back in no particular order; ranking and pagination happen in the
    /// service so that sorting always precedes slicing. Teams without any result are
    /// absent rather than reported with a zero total.
    ///
    /// # Arguments
    /// - `track_id`: Track whose timelines are aggregated
    ///
    /// # Returns
    /// - `Ok(Vec<TeamResult>)`: One entry per team with at least one result
    /// - `Err(DbErr)`: Query failed
    pub async fn sum_results_by_track(&self, track_id: i32) -> Result<Vec<TeamResult>, DbErr> {
        let rows = entity::prelude::TeamActionStatus::find()
            .select_only()
            .column_as(entity::team_action_status::Column::TrackTeamId, "team_id")
            .column_as(
                entity::team_action_status::Column::ResultValue.sum(),
                "total_value",
            )
            .join(
                JoinType::InnerJoin,
                entity::team_action_status::Relation::Timeline.def(),
            )
            .filter(entity::timeline::Column::TrackId.eq(track_id))
            .group_by(entity::team_action_status::Column::TrackTeamId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(team_id, total_value)| TeamResult {
                team_id,
                total_value,
            })
            .collect())
    }
}
