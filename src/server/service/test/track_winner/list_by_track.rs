use super::*;

/// Tests that a track's winners come back ordered by place.
///
/// Expected: Ok(vec) ordered by place regardless of insertion order
#[tokio::test]
async fn orders_by_place() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, track) = factory::helpers::create_track_with_dependencies(db).await?;
    let first = factory::create_track_team(db, track.id).await?;
    let second = factory::create_track_team(db, track.id).await?;
    factory::create_track_winner(db, track.id, first.id, 1, false).await?;
    factory::create_track_winner(db, track.id, second.id, 0, true).await?;

    let winners = TrackWinnerService::new(db).list_by_track(track.id).await?;

    let places: Vec<_> = winners.iter().map(|w| (w.track_team_id, w.place)).collect();
    assert_eq!(places, vec![(second.id, 0), (first.id, 1)]);

    Ok(())
}

/// Tests that an unknown track is reported as missing instead of an empty list.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_track() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TrackWinnerService::new(db).list_by_track(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
