use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::timeline::TimelineRepository,
    error::AppError,
    model::timeline::{
        CreateTimelineParams, MAX_VALUE_PER_SCORING_TIMELINE, Timeline, TimelineStatus,
        UpdateTimelineParams,
    },
    service::track::ensure_track_exists,
};

pub struct TimelineService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TimelineService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a track's timelines in evaluation order (`count_num` ascending)
    pub async fn list_by_track(
        &self,
        track_id: i32,
        status: Option<&str>,
    ) -> Result<Vec<Timeline>, AppError> {
        let timelines = TimelineRepository::new(self.db)
            .get_by_track_id(track_id, status)
            .await?;

        Ok(timelines)
    }

    pub async fn get(&self, id: i32) -> Result<Timeline, AppError> {
        TimelineRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| timeline_not_found(id))
    }

    /// Appends a timeline to the end of its track
    ///
    /// Allocates a new timeline status whose `count_num` is one past the highest
    /// ordinal already used on the track (`1` for the first timeline). The status row
    /// and the timeline are written in the same transaction.
    ///
    /// # Returns
    /// - `Ok(Timeline)`: The created timeline with its ordinal
    /// - `Err(AppError::NotFound)`: Track doesn't exist
    pub async fn create(&self, params: CreateTimelineParams) -> Result<Timeline, AppError> {
        let txn = self.db.begin().await?;
        let repo = TimelineRepository::new(&txn);

        ensure_track_exists(&txn, params.track_id).await?;

        let count_num = repo.max_count_num(params.track_id).await?.unwrap_or(0) + 1;
        let status = repo.create_status(count_num).await?;
        let timeline = repo.create(params, status).await?;

        txn.commit().await?;

        tracing::debug!(
            timeline_id = timeline.id,
            track_id = timeline.track_id,
            count_num,
            "Timeline created"
        );

        Ok(timeline)
    }

    pub async fn update(&self, params: UpdateTimelineParams) -> Result<Timeline, AppError> {
        let id = params.id;

        let txn = self.db.begin().await?;
        let timeline = TimelineRepository::new(&txn)
            .update(params)
            .await?
            .ok_or_else(|| timeline_not_found(id))?;
        txn.commit().await?;

        Ok(timeline)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !TimelineRepository::new(&txn).delete(id).await? {
            return Err(timeline_not_found(id));
        }

        txn.commit().await?;

        Ok(())
    }

    /// Highest total a team can reach on a track
    ///
    /// Every scoring timeline is worth `MAX_VALUE_PER_SCORING_TIMELINE` points.
    pub async fn max_value(&self, track_id: i32) -> Result<i64, AppError> {
        let scoring = TimelineRepository::new(self.db)
            .count_scoring(track_id)
            .await?;

        Ok(MAX_VALUE_PER_SCORING_TIMELINE * scoring as i64)
    }

    pub async fn list_statuses(&self) -> Result<Vec<TimelineStatus>, AppError> {
        let statuses = TimelineRepository::new(self.db).get_all_statuses().await?;

        Ok(statuses)
    }

    pub async fn create_status(&self, count_num: i32) -> Result<TimelineStatus, AppError> {
        let txn = self.db.begin().await?;
        let status = TimelineRepository::new(&txn).create_status(count_num).await?;
        txn.commit().await?;

        Ok(status)
    }
}

fn timeline_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Timeline {} not found", id))
}
