use super::*;

fn result(team_id: i32, total_value: i64) -> TeamResult {
    TeamResult {
        team_id,
        total_value,
    }
}

/// Tests that standings are sorted by total with ties broken by team id.
///
/// Expected: Ok(vec) ordered 400, 200, 200, 50
#[tokio::test]
async fn sorts_standings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    let teams = seed_totals(db, track.id, &[200, 50, 400, 200]).await?;

    let standings = TrackWinnerService::new(db)
        .calculate_rating(track.id, 100, 0)
        .await?;

    assert_eq!(
        standings,
        vec![
            result(teams[2].id, 400),
            result(teams[0].id, 200),
            result(teams[3].id, 200),
            result(teams[1].id, 50),
        ]
    );

    Ok(())
}

/// Tests that offset and limit page through the sorted standings, not raw rows.
///
/// Expected: Ok(vec) holding the second and third ranked teams
#[tokio::test]
async fn paginates_after_sorting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    let teams = seed_totals(db, track.id, &[10, 40, 30, 20]).await?;

    let standings = TrackWinnerService::new(db)
        .calculate_rating(track.id, 2, 1)
        .await?;

    assert_eq!(
        standings,
        vec![result(teams[2].id, 30), result(teams[3].id, 20)]
    );

    Ok(())
}

/// Tests that a track without submissions has empty standings.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_without_results() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;

    let standings = TrackWinnerService::new(db)
        .calculate_rating(track.id, 100, 0)
        .await?;

    assert!(standings.is_empty());

    Ok(())
}
