use super::*;

/// Tests that only scoring timelines count toward the maximum value.
///
/// Expected: Ok(200) for two scoring timelines and one non-scoring timeline
#[tokio::test]
async fn counts_scoring_timelines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, track) = factory::helpers::create_track_with_dependencies(db).await?;

    let service = TimelineService::new(db);
    service.create(new_timeline(track.id, "First", true)).await?;
    service.create(new_timeline(track.id, "Break", false)).await?;
    service.create(new_timeline(track.id, "Second", true)).await?;

    assert_eq!(service.max_value(track.id).await?, 200);

    Ok(())
}

/// Tests that a track without timelines has no achievable value.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_timelines() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, track) = factory::helpers::create_track_with_dependencies(db).await?;

    assert_eq!(TimelineService::new(db).max_value(track.id).await?, 0);

    Ok(())
}
