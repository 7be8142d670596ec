use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::date::{CreateDateParams, UpdateDateParams},
    service::date::DateService,
};

/// Tests that a window ending before it starts is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn create_rejects_reversed_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let result = DateService::new(db)
        .create(CreateDateParams {
            date_start: now,
            date_end: now - Duration::hours(1),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a partial update is validated against the stored bound.
///
/// Expected: Err(AppError::BadRequest) when the new end precedes the stored start
#[tokio::test]
async fn update_checks_merged_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = factory::create_date(db).await?;

    let service = DateService::new(db);
    let result = service
        .update(UpdateDateParams {
            id: date.id,
            date_start: None,
            date_end: Some(date.date_start - Duration::days(1)),
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let moved = service
        .update(UpdateDateParams {
            id: date.id,
            date_start: None,
            date_end: Some(date.date_end + Duration::days(1)),
        })
        .await?;
    assert_eq!(moved.date_end, date.date_end + Duration::days(1));

    Ok(())
}

/// Tests that deleting an unknown date is reported as missing.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_missing_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = DateService::new(db).delete(7).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
