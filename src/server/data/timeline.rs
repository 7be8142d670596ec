use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::timeline::{
    CreateTimelineParams, Timeline, TimelineStatus, UpdateTimelineParams,
};

pub struct TimelineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TimelineRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a timeline attached to an existing timeline status row
    pub async fn create(
        &self,
        params: CreateTimelineParams,
        timeline_status: TimelineStatus,
    ) -> Result<Timeline, DbErr> {
        let timeline = entity::timeline::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            deadline: ActiveValue::Set(params.deadline),
            is_blocking: ActiveValue::Set(params.is_blocking),
            is_scoring: ActiveValue::Set(params.is_scoring),
            status: ActiveValue::Set(params.status),
            track_id: ActiveValue::Set(params.track_id),
            timeline_status_id: ActiveValue::Set(timeline_status.id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Timeline::from_entity(
            timeline,
            entity::timeline_status::Model {
                id: timeline_status.id,
                count_num: timeline_status.count_num,
            },
        ))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Timeline>, DbErr> {
        let result = entity::prelude::Timeline::find_by_id(id)
            .find_also_related(entity::prelude::TimelineStatus)
            .one(self.db)
            .await?;

        Ok(result.and_then(|(timeline, status)| {
            status.map(|status| Timeline::from_entity(timeline, status))
        }))
    }

    /// Gets the timelines of a track ordered by their ordinal
    ///
    /// # Arguments
    /// - `track_id`: Track to list timelines for
    /// - `status`: Optional exact match on the timeline status
    pub async fn get_by_track_id(
        &self,
        track_id: i32,
        status: Option<&str>,
    ) -> Result<Vec<Timeline>, DbErr> {
        let mut query = entity::prelude::Timeline::find()
            .find_also_related(entity::prelude::TimelineStatus)
            .filter(entity::timeline::Column::TrackId.eq(track_id));

        if let Some(status) = status {
            query = query.filter(entity::timeline::Column::Status.eq(status));
        }

        let timelines = query
            .order_by_asc(entity::timeline_status::Column::CountNum)
            .order_by_asc(entity::timeline::Column::Id)
            .all(self.db)
            .await?;

        Ok(timelines
            .into_iter()
            .filter_map(|(timeline, status)| {
                status.map(|status| Timeline::from_entity(timeline, status))
            })
            .collect())
    }

    /// Gets the highest ordinal among a track's timelines, `None` if it has none
    pub async fn max_count_num(&self, track_id: i32) -> Result<Option<i32>, DbErr> {
        let max = entity::prelude::Timeline::find()
            .select_only()
            .column_as(entity::timeline_status::Column::CountNum.max(), "max_count_num")
            .inner_join(entity::prelude::TimelineStatus)
            .filter(entity::timeline::Column::TrackId.eq(track_id))
            .into_tuple::<Option<i32>>()
            .one(self.db)
            .await?;

        Ok(max.flatten())
    }

    /// Counts the timelines of a track that contribute to its score
    pub async fn count_scoring(&self, track_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Timeline::find()
            .filter(entity::timeline::Column::TrackId.eq(track_id))
            .filter(entity::timeline::Column::IsScoring.eq(true))
            .count(self.db)
            .await
    }

    pub async fn update(&self, params: UpdateTimelineParams) -> Result<Option<Timeline>, DbErr> {
        let Some((timeline, Some(status))) = entity::prelude::Timeline::find_by_id(params.id)
            .find_also_related(entity::prelude::TimelineStatus)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::timeline::ActiveModel = timeline.clone().into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(deadline) = params.deadline {
            active_model.deadline = ActiveValue::Set(deadline);
        }
        if let Some(is_blocking) = params.is_blocking {
            active_model.is_blocking = ActiveValue::Set(is_blocking);
        }
        if let Some(is_scoring) = params.is_scoring {
            active_model.is_scoring = ActiveValue::Set(is_scoring);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }

        let updated = if active_model.is_changed() {
            active_model.update(self.db).await?
        } else {
            timeline
        };

        Ok(Some(Timeline::from_entity(updated, status)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Timeline::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_status(&self, count_num: i32) -> Result<TimelineStatus, DbErr> {
        let status = entity::timeline_status::ActiveModel {
            count_num: ActiveValue::Set(count_num),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TimelineStatus::from_entity(status))
    }

    pub async fn get_all_statuses(&self) -> Result<Vec<TimelineStatus>, DbErr> {
        let statuses = entity::prelude::TimelineStatus::find()
            .order_by_asc(entity::timeline_status::Column::CountNum)
            .order_by_asc(entity::timeline_status::Column::Id)
            .all(self.db)
            .await?;

        Ok(statuses.into_iter().map(TimelineStatus::from_entity).collect())
    }
}
