use super::*;

/// Tests that starting and ending an event walks it through its lifecycle.
///
/// Expected: in_process after start, completed after end
#[tokio::test]
async fn start_then_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_date(db).await?;

    let service = EventService::new(db);

    let started = service.start(event.id).await?;
    assert_eq!(started.status, LifecycleStatus::InProcess);

    let ended = service.end(event.id).await?;
    assert_eq!(ended.status, LifecycleStatus::Completed);

    Ok(())
}

/// Tests that an event whose window has opened is listed for starting and no longer
/// once it is in process.
///
/// Expected: listed before start, absent after
#[tokio::test]
async fn started_event_leaves_start_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, event) = factory::helpers::create_event_with_date(db).await?;
    let now = Utc::now();

    let service = EventService::new(db);
    let before: Vec<_> = service
        .list_to_start(now)
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(before, vec![event.id]);

    service.start(event.id).await?;

    assert!(service.list_to_start(now).await?.is_empty());

    Ok(())
}

/// Tests that starting an unknown event is reported as missing.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn start_missing_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventService::new(db).start(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that an event is created scheduled and only once its date exists.
///
/// Expected: Ok(Event) in scheduled state; Err(AppError::NotFound) for an unknown date
#[tokio::test]
async fn create_requires_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = factory::date::DateFactory::new(db)
        .date_start(Utc::now() + Duration::days(1))
        .date_end(Utc::now() + Duration::days(2))
        .build()
        .await?;

    let service = EventService::new(db);
    let params = CreateEventParams {
        title: "Spring Hackathon".to_string(),
        description: "48 hours".to_string(),
        redirect_link: "https://example.com/spring".to_string(),
        date_id: date.id,
    };

    let event = service.create(params.clone()).await?;
    assert_eq!(event.status, LifecycleStatus::Scheduled);

    let missing = service
        .create(CreateEventParams {
            title: "Autumn Hackathon".to_string(),
            date_id: date.id + 100,
            ..params
        })
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}
