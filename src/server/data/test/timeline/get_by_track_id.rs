use super::*;

/// Tests that timelines are listed by ordinal rather than insertion order.
///
/// Expected: Ok(vec) ordered by count_num ascending
#[tokio::test]
async fn orders_by_count_num() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_date, _event, track) = factory::helpers::create_track_with_dependencies(db).await?;

    for count_num in [2, 3, 1] {
        let status = factory::create_timeline_status(db, count_num).await?;
        factory::create_timeline(db, track.id, status.id).await?;
    }

    let repo = TimelineRepository::new(db);
    let timelines = repo.get_by_track_id(track.id, None).await?;

    let ordinals: Vec<i32> = timelines.iter().map(|t| t.count_num).collect();
    assert_eq!(ordinals, vec![1, 2, 3]);

    Ok(())
}

/// Tests filtering a track's timelines by status.
///
/// Expected: Ok(vec) containing only the matching timeline
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_date, _event, track) = factory::helpers::create_track_with_dependencies(db).await?;

    let first = factory::create_timeline_status(db, 1).await?;
    factory::create_timeline(db, track.id, first.id).await?;
    let second = factory::create_timeline_status(db, 2).await?;
    let closed = factory::timeline::TimelineFactory::new(db, track.id, second.id)
        .status("closed")
        .build()
        .await?;

    let repo = TimelineRepository::new(db);
    let timelines = repo.get_by_track_id(track.id, Some("closed")).await?;

    assert_eq!(timelines.len(), 1);
    assert_eq!(timelines[0].id, closed.id);
    assert_eq!(timelines[0].count_num, 2);

    Ok(())
}
