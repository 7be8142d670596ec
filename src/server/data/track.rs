use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    status::LifecycleStatus,
    track::{CreateTrackParams, Track, UpdateTrackParams},
};

pub struct TrackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrackRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new track in the `scheduled` state
    pub async fn create(&self, params: CreateTrackParams) -> Result<Track, DbErr> {
        let track = entity::track::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            is_score_based: ActiveValue::Set(params.is_score_based),
            status: ActiveValue::Set(LifecycleStatus::Scheduled.as_str().to_string()),
            event_id: ActiveValue::Set(params.event_id),
            date_id: ActiveValue::Set(params.date_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Track::from_entity(track)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Track>, DbErr> {
        entity::prelude::Track::find_by_id(id)
            .one(self.db)
            .await?
            .map(Track::from_entity)
            .transpose()
    }

    pub async fn get_all(&self) -> Result<Vec<Track>, DbErr> {
        let tracks = entity::prelude::Track::find()
            .order_by_asc(entity::track::Column::Id)
            .all(self.db)
            .await?;

        tracks.into_iter().map(Track::from_entity).collect()
    }

    pub async fn get_by_event_id(&self, event_id: i32) -> Result<Vec<Track>, DbErr> {
        let tracks = entity::prelude::Track::find()
            .filter(entity::track::Column::EventId.eq(event_id))
            .order_by_asc(entity::track::Column::Id)
            .all(self.db)
            .await?;

        tracks.into_iter().map(Track::from_entity).collect()
    }

    /// Gets tracks whose date window has opened but which are still `scheduled`
    pub async fn get_to_start(&self, now: DateTime<Utc>) -> Result<Vec<Track>, DbErr> {
        let tracks = entity::prelude::Track::find()
            .inner_join(entity::prelude::Date)
            .filter(entity::date::Column::DateStart.lte(now))
            .filter(entity::track::Column::Status.eq(LifecycleStatus::Scheduled.as_str()))
            .order_by_asc(entity::track::Column::Id)
            .all(self.db)
            .await?;

        tracks.into_iter().map(Track::from_entity).collect()
    }

    /// Gets tracks whose date window has closed but which are not yet `completed`
    pub async fn get_to_end(&self, now: DateTime<Utc>) -> Result<Vec<Track>, DbErr> {
        let tracks = entity::prelude::Track::find()
            .inner_join(entity::prelude::Date)
            .filter(entity::date::Column::DateEnd.lte(now))
            .filter(entity::track::Column::Status.ne(LifecycleStatus::Completed.as_str()))
            .order_by_asc(entity::track::Column::Id)
            .all(self.db)
            .await?;

        tracks.into_iter().map(Track::from_entity).collect()
    }

    /// Applies a partial update, returning `None` if the track doesn't exist
    pub async fn update(&self, params: UpdateTrackParams) -> Result<Option<Track>, DbErr> {
        let Some(track) = entity::prelude::Track::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::track::ActiveModel = track.clone().into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(date_id) = params.date_id {
            active_model.date_id = ActiveValue::Set(date_id);
        }

        let updated = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            track
        };

        Track::from_entity(updated).map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Track::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
