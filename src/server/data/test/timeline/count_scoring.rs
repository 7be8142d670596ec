use super::*;

/// Tests that only scoring timelines are counted.
///
/// Expected: Ok(2) with two scoring and one non-scoring timeline
#[tokio::test]
async fn counts_only_scoring_timelines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_date, _event, track) = factory::helpers::create_track_with_dependencies(db).await?;

    factory::helpers::create_scoring_timeline(db, track.id, 1).await?;
    factory::helpers::create_scoring_timeline(db, track.id, 2).await?;
    let status = factory::create_timeline_status(db, 3).await?;
    factory::create_timeline(db, track.id, status.id).await?;

    let repo = TimelineRepository::new(db);
    let count = repo.count_scoring(track.id).await?;

    assert_eq!(count, 2);

    Ok(())
}
