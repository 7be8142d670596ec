use super::*;

/// Tests the ordinal lookup for a track without timelines.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_timelines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_date, _event, track) = factory::helpers::create_track_with_dependencies(db).await?;

    let repo = TimelineRepository::new(db);
    let max = repo.max_count_num(track.id).await?;

    assert_eq!(max, None);

    Ok(())
}

/// Tests that the highest ordinal is scoped to the requested track.
///
/// Expected: Ok(Some(3)) for the first track even though another track has ordinal 7
#[tokio::test]
async fn returns_highest_ordinal_of_track() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (date, event, track) = factory::helpers::create_track_with_dependencies(db).await?;
    let other = factory::create_track(db, event.id, date.id).await?;

    for count_num in [1, 3, 2] {
        let status = factory::create_timeline_status(db, count_num).await?;
        factory::create_timeline(db, track.id, status.id).await?;
    }
    let status = factory::create_timeline_status(db, 7).await?;
    factory::create_timeline(db, other.id, status.id).await?;

    let repo = TimelineRepository::new(db);
    let max = repo.max_count_num(track.id).await?;

    assert_eq!(max, Some(3));

    Ok(())
}
