use super::*;

/// Tests that track eligibility uses the track's own date window, not the event's.
///
/// The event's window is open but the second track's window is in the future.
///
/// Expected: Ok(vec) containing only the track with an open window
#[tokio::test]
async fn uses_track_date_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let (open, event) = factory::helpers::create_event_with_date(db).await?;
    let future = factory::date::DateFactory::new(db)
        .date_start(now + Duration::days(1))
        .date_end(now + Duration::days(2))
        .build()
        .await?;

    let eligible = factory::create_track(db, event.id, open.id).await?;
    factory::create_track(db, event.id, future.id).await?;

    let repo = TrackRepository::new(db);
    let tracks = repo.get_to_start(now).await?;

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, eligible.id);
    assert_eq!(tracks[0].status, LifecycleStatus::Scheduled);

    Ok(())
}
