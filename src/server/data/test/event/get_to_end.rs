use super::*;

/// Tests that every event past its window end is eligible unless already completed.
///
/// Expected: Ok(vec) with the scheduled and in-process events, not the completed one
#[tokio::test]
async fn returns_unfinished_events_with_closed_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let closed = factory::date::DateFactory::new(db)
        .date_start(now - Duration::days(2))
        .date_end(now - Duration::hours(1))
        .build()
        .await?;
    let running = factory::create_date(db).await?;

    let scheduled = factory::create_event(db, closed.id).await?;
    let in_process = factory::event::EventFactory::new(db, closed.id)
        .status("in_process")
        .build()
        .await?;
    factory::event::EventFactory::new(db, closed.id)
        .status("completed")
        .build()
        .await?;
    factory::event::EventFactory::new(db, running.id)
        .status("in_process")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let events = repo.get_to_end(now).await?;

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![scheduled.id, in_process.id]);

    Ok(())
}
