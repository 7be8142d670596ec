//! Track factory for creating test track entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test tracks with customizable fields.
///
/// Tracks default to not score-based and `scheduled`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::track::TrackFactory;
///
/// let track = TrackFactory::new(&db, event.id, date.id)
///     .score_based(true)
///     .status("completed")
///     .build()
///     .await?;
/// ```
pub struct TrackFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    is_score_based: bool,
    status: String,
    event_id: i32,
    date_id: i32,
}

impl<'a> TrackFactory<'a> {
    /// Creates a new TrackFactory for the given event and date window.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `event_id` - Event the track belongs to
    /// - `date_id` - Date window of the track
    ///
    /// # Returns
    /// - `TrackFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, event_id: i32, date_id: i32) -> Self {
        Self {
            db,
            title: format!("Track {}", next_id()),
            description: "Test track".to_string(),
            is_score_based: false,
            status: "scheduled".to_string(),
            event_id,
            date_id,
        }
    }

    /// Sets the track title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets whether winners are derived from submitted scores.
    pub fn score_based(mut self, is_score_based: bool) -> Self {
        self.is_score_based = is_score_based;
        self
    }

    /// Sets the lifecycle status (`scheduled`, `in_process` or `completed`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the track entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::track::Model)` - Created track entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::track::Model, DbErr> {
        entity::track::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            is_score_based: ActiveValue::Set(self.is_score_based),
            status: ActiveValue::Set(self.status),
            event_id: ActiveValue::Set(self.event_id),
            date_id: ActiveValue::Set(self.date_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled, non score-based track with default values.
///
/// Shorthand for `TrackFactory::new(db, event_id, date_id).build().await`.
pub async fn create_track(
    db: &DatabaseConnection,
    event_id: i32,
    date_id: i32,
) -> Result<entity::track::Model, DbErr> {
    TrackFactory::new(db, event_id, date_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::helpers::{create_completed_scored_track, create_event_with_date};

    #[tokio::test]
    async fn creates_track_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_event_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (date, event) = create_event_with_date(db).await?;
        let track = create_track(db, event.id, date.id).await?;

        assert_eq!(track.event_id, event.id);
        assert_eq!(track.date_id, date.id);
        assert!(!track.is_score_based);
        assert_eq!(track.status, "scheduled");

        Ok(())
    }

    #[tokio::test]
    async fn creates_completed_scored_track() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_event_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let track = create_completed_scored_track(db).await?;

        assert!(track.is_score_based);
        assert_eq!(track.status, "completed");

        Ok(())
    }
}
