use super::*;

/// Tests that a partial update only touches the provided fields.
///
/// Expected: Ok(Some(event)) with the new status and the original title
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_date, event) = factory::helpers::create_event_with_date(db).await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(UpdateEventParams::status_only(
            event.id,
            LifecycleStatus::InProcess,
        ))
        .await?
        .unwrap();

    assert_eq!(updated.status, LifecycleStatus::InProcess);
    assert_eq!(updated.title, event.title);
    assert_eq!(updated.description, event.description);
    assert!(updated.updated_at >= event.updated_at);

    Ok(())
}

/// Tests that explicitly provided empty values are written rather than ignored.
///
/// Expected: Ok(Some(event)) with an empty description
#[tokio::test]
async fn writes_explicit_empty_string() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_date, event) = factory::helpers::create_event_with_date(db).await?;

    let repo = EventRepository::new(db);
    let updated = repo
        .update(UpdateEventParams {
            id: event.id,
            description: Some(String::new()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.description, "");
    assert_eq!(updated.title, event.title);

    Ok(())
}

/// Tests updating an event that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = EventRepository::new(db);
    let result = repo
        .update(UpdateEventParams::status_only(999, LifecycleStatus::Completed))
        .await?;

    assert!(result.is_none());

    Ok(())
}
