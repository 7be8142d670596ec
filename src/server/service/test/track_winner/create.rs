use super::*;

/// Tests that winners of a score-based track cannot be entered by hand.
///
/// Expected: Err(AppError::Forbidden) and no winner rows
#[tokio::test]
async fn forbids_score_based_track() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    let team = factory::create_track_team(db, track.id).await?;

    let result = TrackWinnerService::new(db)
        .create(CreateTrackWinnerParams {
            track_id: track.id,
            track_team_id: team.id,
            place: 0,
            is_awardee: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(
        TrackWinnerRepository::new(db)
            .count_by_track_id(track.id)
            .await?,
        0
    );

    Ok(())
}

/// Tests that winners of a track judged without scores can be entered by hand.
///
/// Expected: Ok(TrackWinner) that can be read back
#[tokio::test]
async fn creates_for_non_scored_track() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, track) = factory::helpers::create_track_with_dependencies(db).await?;
    let team = factory::create_track_team(db, track.id).await?;

    let service = TrackWinnerService::new(db);
    let winner = service
        .create(CreateTrackWinnerParams {
            track_id: track.id,
            track_team_id: team.id,
            place: 0,
            is_awardee: true,
        })
        .await?;

    assert_eq!(winner.place, 0);
    assert_eq!(service.get(track.id, team.id).await?, winner);
    assert_eq!(service.list_by_team(team.id).await?, vec![winner]);

    Ok(())
}
