use super::*;

/// Tests that completed tracks are never returned for ending again.
///
/// Expected: Ok(vec) with only the in-process track
#[tokio::test]
async fn skips_completed_tracks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let (_open, event) = factory::helpers::create_event_with_date(db).await?;
    let closed = factory::date::DateFactory::new(db)
        .date_start(now - Duration::days(2))
        .date_end(now - Duration::days(1))
        .build()
        .await?;

    let running = factory::track::TrackFactory::new(db, event.id, closed.id)
        .status("in_process")
        .build()
        .await?;
    factory::track::TrackFactory::new(db, event.id, closed.id)
        .status("completed")
        .build()
        .await?;

    let repo = TrackRepository::new(db);
    let tracks = repo.get_to_end(now).await?;

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, running.id);

    Ok(())
}
