//! Timeline factory for creating test timelines and their ordinal status rows.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test timelines with customizable fields.
///
/// Timelines default to non-blocking, non-scoring, `open`, with a deadline one day
/// from now.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::timeline::TimelineFactory;
///
/// let timeline = TimelineFactory::new(&db, track.id, status.id)
///     .scoring(true)
///     .build()
///     .await?;
/// ```
pub struct TimelineFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::timeline::Model,
}

impl<'a> TimelineFactory<'a> {
    /// Creates a new TimelineFactory.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `track_id` - Track the timeline belongs to
    /// - `timeline_status_id` - Ordinal status row of the timeline
    ///
    /// # Returns
    /// - `TimelineFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, track_id: i32, timeline_status_id: i32) -> Self {
        let entity = entity::timeline::Model {
            id: 0,
            title: format!("Stage {}", next_id()),
            description: "Test stage".to_string(),
            deadline: Utc::now() + Duration::days(1),
            is_blocking: false,
            is_scoring: false,
            status: "open".to_string(),
            track_id,
            timeline_status_id,
        };

        Self { db, entity }
    }

    /// Sets whether the timeline contributes to the track's score.
    pub fn scoring(mut self, is_scoring: bool) -> Self {
        self.entity.is_scoring = is_scoring;
        self
    }

    /// Sets whether the timeline blocks later ones until completed.
    pub fn blocking(mut self, is_blocking: bool) -> Self {
        self.entity.is_blocking = is_blocking;
        self
    }

    /// Sets the free-form timeline status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    /// Builds and inserts the timeline entity into the database.
    pub async fn build(self) -> Result<entity::timeline::Model, DbErr> {
        entity::timeline::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.entity.title),
            description: ActiveValue::Set(self.entity.description),
            deadline: ActiveValue::Set(self.entity.deadline),
            is_blocking: ActiveValue::Set(self.entity.is_blocking),
            is_scoring: ActiveValue::Set(self.entity.is_scoring),
            status: ActiveValue::Set(self.entity.status),
            track_id: ActiveValue::Set(self.entity.track_id),
            timeline_status_id: ActiveValue::Set(self.entity.timeline_status_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a timeline status row with the given ordinal.
pub async fn create_timeline_status(
    db: &DatabaseConnection,
    count_num: i32,
) -> Result<entity::timeline_status::Model, DbErr> {
    entity::timeline_status::ActiveModel {
        id: ActiveValue::NotSet,
        count_num: ActiveValue::Set(count_num),
    }
    .insert(db)
    .await
}

/// Creates a non-scoring timeline with default values.
pub async fn create_timeline(
    db: &DatabaseConnection,
    track_id: i32,
    timeline_status_id: i32,
) -> Result<entity::timeline::Model, DbErr> {
    TimelineFactory::new(db, track_id, timeline_status_id)
        .build()
        .await
}
