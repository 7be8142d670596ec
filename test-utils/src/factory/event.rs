//! Event factory for creating test event entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test events with customizable fields.
///
/// Titles default to a unique `Event {n}` so several events can coexist under the
/// unique title constraint.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db, date.id)
///     .status("in_process")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    redirect_link: String,
    status: String,
    date_id: i32,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory for the given date window.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `date_id` - Date window the event runs in
    ///
    /// # Returns
    /// - `EventFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, date_id: i32) -> Self {
        let id = next_id();

        Self {
            db,
            title: format!("Event {}", id),
            description: "Test event".to_string(),
            redirect_link: format!("https://example.com/events/{}", id),
            status: "scheduled".to_string(),
            date_id,
        }
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the lifecycle status (`scheduled`, `in_process` or `completed`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();

        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            redirect_link: ActiveValue::Set(self.redirect_link),
            status: ActiveValue::Set(self.status),
            date_id: ActiveValue::Set(self.date_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled event with default values for the specified date window.
///
/// Shorthand for `EventFactory::new(db, date_id).build().await`.
pub async fn create_event(
    db: &DatabaseConnection,
    date_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db, date_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::date::create_date;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_events_with_unique_titles() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Date)
            .with_table(Event)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let date = create_date(db).await?;
        let first = create_event(db, date.id).await?;
        let second = create_event(db, date.id).await?;

        assert_ne!(first.title, second.title);
        assert_eq!(first.status, "scheduled");
        assert_eq!(first.date_id, date.id);

        Ok(())
    }
}
