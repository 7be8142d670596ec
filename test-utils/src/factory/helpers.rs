//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities together with
//! the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event together with the date window it references.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((date, event))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_date(
    db: &DatabaseConnection,
) -> Result<(entity::date::Model, entity::event::Model), DbErr> {
    let date = crate::factory::date::create_date(db).await?;
    let event = crate::factory::event::create_event(db, date.id).await?;

    Ok((date, event))
}

/// Creates a complete track hierarchy with all dependencies.
///
/// This creates:
/// 1. Date
/// 2. Event
/// 3. Track (not score-based, `scheduled`)
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((date, event, track))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_track_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::date::Model,
        entity::event::Model,
        entity::track::Model,
    ),
    DbErr,
> {
    let (date, event) = create_event_with_date(db).await?;
    let track = crate::factory::track::create_track(db, event.id, date.id).await?;

    Ok((date, event, track))
}

/// Creates a score-based track that has already completed.
///
/// This is the starting point for ranking tests: register teams with
/// `create_track_team`, add scoring timelines with `create_scoring_timeline` and
/// submit results with `create_team_action_status`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::track::Model)` - Created track
/// - `Err(DbErr)` - Database error during creation
pub async fn create_completed_scored_track(
    db: &DatabaseConnection,
) -> Result<entity::track::Model, DbErr> {
    let (date, event) = create_event_with_date(db).await?;

    crate::factory::track::TrackFactory::new(db, event.id, date.id)
        .score_based(true)
        .status("completed")
        .build()
        .await
}

/// Creates a scoring timeline for a track with its own ordinal status row.
///
/// # Arguments
/// - `db` - Database connection
/// - `track_id` - Track the timeline belongs to
/// - `count_num` - Ordinal of the timeline within the track
///
/// # Returns
/// - `Ok(entity::timeline::Model)` - Created timeline
/// - `Err(DbErr)` - Database error during creation
pub async fn create_scoring_timeline(
    db: &DatabaseConnection,
    track_id: i32,
    count_num: i32,
) -> Result<entity::timeline::Model, DbErr> {
    let status = crate::factory::timeline::create_timeline_status(db, count_num).await?;

    crate::factory::timeline::TimelineFactory::new(db, track_id, status.id)
        .scoring(true)
        .build()
        .await
}
