use super::*;

/// Tests that only the provided fields change, including empty strings.
///
/// Expected: description cleared, title and status untouched
#[tokio::test]
async fn merges_provided_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_date(db).await?;

    let updated = EventService::new(db)
        .update(UpdateEventParams {
            id: event.id,
            description: Some(String::new()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.title, event.title);
    assert_eq!(updated.description, "");
    assert_eq!(updated.status, LifecycleStatus::Scheduled);

    Ok(())
}

/// Tests that moving an event to an unknown date is rejected without changes.
///
/// Expected: Err(AppError::NotFound) and the original date kept
#[tokio::test]
async fn rejects_unknown_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (date, event) = factory::helpers::create_event_with_date(db).await?;

    let service = EventService::new(db);
    let result = service
        .update(UpdateEventParams {
            id: event.id,
            date_id: Some(date.id + 100),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(service.get(event.id).await?.date_id, date.id);

    Ok(())
}
