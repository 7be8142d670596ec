use super::*;

/// Tests the end-to-end ranking of three teams with a tie at the top.
///
/// Teams A and B total 300, C totals 100; threshold 200, limit 3.
///
/// Expected: Ok(vec) with A at place 0 and B at place 1 (tie broken by id), both
/// awardees, and C at place 2 without the awardee flag
#[tokio::test]
async fn ranks_and_flags_awardees() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    let teams = seed_totals(db, track.id, &[300, 300, 100]).await?;

    let service = TrackWinnerService::new(db);
    let winners = service.set_results(track.id, 200, 3).await?;

    let summary: Vec<_> = winners
        .iter()
        .map(|w| (w.track_team_id, w.place, w.is_awardee))
        .collect();
    assert_eq!(
        summary,
        vec![
            (teams[0].id, 0, true),
            (teams[1].id, 1, true),
            (teams[2].id, 2, false),
        ]
    );

    let stored = TrackWinnerRepository::new(db)
        .get_by_track_id(track.id)
        .await?;
    assert_eq!(stored, winners);

    Ok(())
}

/// Tests that the limit caps the number of winners generated.
///
/// Expected: Ok(vec) with min(N, limit) winners at places 0..limit
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    let teams = seed_totals(db, track.id, &[50, 400, 200, 10]).await?;

    let winners = TrackWinnerService::new(db)
        .set_results(track.id, 100, 2)
        .await?;

    let summary: Vec<_> = winners
        .iter()
        .map(|w| (w.track_team_id, w.place))
        .collect();
    assert_eq!(summary, vec![(teams[1].id, 0), (teams[2].id, 1)]);

    Ok(())
}

/// Tests that a limit larger than the number of teams yields every team.
///
/// Expected: Ok(vec) with one winner per team
#[tokio::test]
async fn returns_all_teams_below_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    seed_totals(db, track.id, &[10, 20]).await?;

    let winners = TrackWinnerService::new(db)
        .set_results(track.id, 0, 100)
        .await?;

    assert_eq!(winners.len(), 2);
    assert!(winners.iter().all(|w| w.is_awardee));

    Ok(())
}

/// Tests that a track judged without scores cannot have results generated.
///
/// Expected: Err(AppError::InvalidState) and no winner rows
#[tokio::test]
async fn rejects_non_score_based_track() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (date, event) = factory::helpers::create_event_with_date(db).await?;
    let track = factory::track::TrackFactory::new(db, event.id, date.id)
        .score_based(false)
        .status("completed")
        .build()
        .await?;
    seed_totals(db, track.id, &[300, 100]).await?;

    let result = TrackWinnerService::new(db)
        .set_results(track.id, 200, 3)
        .await;

    assert!(matches!(result, Err(AppError::InvalidState(_))));
    assert_eq!(
        TrackWinnerRepository::new(db)
            .count_by_track_id(track.id)
            .await?,
        0
    );

    Ok(())
}

/// Tests that a score-based track that is still running cannot have results generated.
///
/// Expected: Err(AppError::InvalidState) and no winner rows
#[tokio::test]
async fn rejects_track_in_process() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (date, event) = factory::helpers::create_event_with_date(db).await?;
    let track = factory::track::TrackFactory::new(db, event.id, date.id)
        .score_based(true)
        .status("in_process")
        .build()
        .await?;
    seed_totals(db, track.id, &[300]).await?;

    let result = TrackWinnerService::new(db)
        .set_results(track.id, 200, 3)
        .await;

    assert!(matches!(result, Err(AppError::InvalidState(_))));
    assert_eq!(
        TrackWinnerRepository::new(db)
            .count_by_track_id(track.id)
            .await?,
        0
    );

    Ok(())
}

/// Tests that a second generation run is refused and leaves the first run intact.
///
/// Expected: Err(AppError::InvalidState) and the original winners unchanged
#[tokio::test]
async fn rejects_second_run() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    seed_totals(db, track.id, &[300, 100]).await?;

    let service = TrackWinnerService::new(db);
    let first = service.set_results(track.id, 200, 3).await?;
    let second = service.set_results(track.id, 50, 3).await;

    assert!(matches!(second, Err(AppError::InvalidState(_))));
    assert_eq!(
        TrackWinnerRepository::new(db)
            .get_by_track_id(track.id)
            .await?,
        first
    );

    Ok(())
}

/// Tests that a failing insert midway through generation leaves no winners behind.
///
/// A trigger rejects the winner at place 1, after place 0 was already inserted.
///
/// Expected: Err(AppError::DbErr) and no winner rows for the track
#[tokio::test]
async fn rolls_back_on_failed_insert() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    seed_totals(db, track.id, &[300, 200, 100]).await?;
    db.execute_unprepared(
        "CREATE TRIGGER reject_second_place BEFORE INSERT ON track_winner \
         WHEN NEW.place = 1 BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
    )
    .await?;

    let result = TrackWinnerService::new(db)
        .set_results(track.id, 150, 3)
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(
        TrackWinnerRepository::new(db)
            .count_by_track_id(track.id)
            .await?,
        0
    );

    Ok(())
}

/// Tests that an unknown track is reported as missing.
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

    let result = TrackWinnerService::new(db).set_results(999, 0, 3).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
