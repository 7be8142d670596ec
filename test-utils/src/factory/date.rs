//! Date factory for creating test date windows.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test date windows with customizable bounds.
///
/// Defaults to a window that opened one day ago and closes one day from now.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::date::DateFactory;
///
/// let date = DateFactory::new(&db)
///     .date_start(Utc::now() + Duration::hours(1))
///     .build()
///     .await?;
/// ```
pub struct DateFactory<'a> {
    db: &'a DatabaseConnection,
    date_start: DateTime<Utc>,
    date_end: DateTime<Utc>,
}

impl<'a> DateFactory<'a> {
    /// Creates a new DateFactory with a window around the current time.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DateFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let now = Utc::now();

        Self {
            db,
            date_start: now - Duration::days(1),
            date_end: now + Duration::days(1),
        }
    }

    /// Sets the start of the window.
    pub fn date_start(mut self, date_start: DateTime<Utc>) -> Self {
        self.date_start = date_start;
        self
    }

    /// Sets the end of the window.
    pub fn date_end(mut self, date_end: DateTime<Utc>) -> Self {
        self.date_end = date_end;
        self
    }

    /// Builds and inserts the date entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::date::Model)` - Created date entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::date::Model, DbErr> {
        entity::date::ActiveModel {
            id: ActiveValue::NotSet,
            date_start: ActiveValue::Set(self.date_start),
            date_end: ActiveValue::Set(self.date_end),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a date window with default values.
///
/// Shorthand for `DateFactory::new(db).build().await`.
pub async fn create_date(db: &DatabaseConnection) -> Result<entity::date::Model, DbErr> {
    DateFactory::new(db).build().await
}
