use super::*;

/// Tests that only scheduled events whose window has opened are eligible to start.
///
/// Creates one open scheduled event, one future scheduled event and one open event that
/// is already running.
///
/// Expected: Ok(vec) containing only the open scheduled event
#[tokio::test]
async fn returns_scheduled_events_with_open_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let open = factory::create_date(db).await?;
    let future = factory::date::DateFactory::new(db)
        .date_start(now + Duration::hours(2))
        .date_end(now + Duration::hours(4))
        .build()
        .await?;

    let eligible = factory::create_event(db, open.id).await?;
    factory::create_event(db, future.id).await?;
    factory::event::EventFactory::new(db, open.id)
        .status("in_process")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let events = repo.get_to_start(now).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, eligible.id);

    Ok(())
}

/// Tests that a window starting exactly at the reference time counts as open.
///
/// Expected: Ok(vec) with the event
#[tokio::test]
async fn includes_window_starting_now() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let date = factory::date::DateFactory::new(db)
        .date_start(now)
        .date_end(now + Duration::hours(1))
        .build()
        .await?;
    let event = factory::create_event(db, date.id).await?;

    let repo = EventRepository::new(db);
    let events = repo.get_to_start(now).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, event.id);

    Ok(())
}
