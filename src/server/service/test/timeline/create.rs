use super::*;

/// Tests that timelines of a track get consecutive ordinals starting at 1.
///
/// Expected: count_num 1, 2, 3 and listing in that order
#[tokio::test]
async fn allocates_consecutive_count_nums() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, track) = factory::helpers::create_track_with_dependencies(db).await?;

    let service = TimelineService::new(db);
    let first = service.create(new_timeline(track.id, "Qualifier", true)).await?;
    let second = service.create(new_timeline(track.id, "Semi", true)).await?;
    let third = service.create(new_timeline(track.id, "Final", false)).await?;

    assert_eq!(
        (first.count_num, second.count_num, third.count_num),
        (1, 2, 3)
    );

    let titles: Vec<_> = service
        .list_by_track(track.id, None)
        .await?
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["Qualifier", "Semi", "Final"]);

    Ok(())
}

/// Tests that ordinals are allocated per track, not globally.
///
/// Expected: the first timeline of a second track also gets count_num 1
#[tokio::test]
async fn numbers_each_track_independently() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, track) = factory::helpers::create_track_with_dependencies(db).await?;
    let (_, _, other) = factory::helpers::create_track_with_dependencies(db).await?;

    let service = TimelineService::new(db);
    service.create(new_timeline(track.id, "One", true)).await?;
    service.create(new_timeline(track.id, "Two", true)).await?;
    let timeline = service.create(new_timeline(other.id, "One", true)).await?;

    assert_eq!(timeline.count_num, 1);

    Ok(())
}

/// Tests that a timeline cannot be added to an unknown track.
///
/// Expected: Err(AppError::NotFound) and no status row allocated
#[tokio::test]
async fn fails_for_missing_track() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = TimelineService::new(db);
    let result = service.create(new_timeline(999, "Orphan", true)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(service.list_statuses().await?.is_empty());

    Ok(())
}
