use super::*;

/// Tests that results are summed per team across all timelines of the track.
///
/// Team A scores 40 + 60, team B scores 70 + 0.
///
/// Expected: Ok(vec) with A = 100 and B = 70
#[tokio::test]
async fn sums_results_per_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    let first = factory::helpers::create_scoring_timeline(db, track.id, 1).await?;
    let second = factory::helpers::create_scoring_timeline(db, track.id, 2).await?;
    let team_a = factory::create_track_team(db, track.id).await?;
    let team_b = factory::create_track_team(db, track.id).await?;

    factory::create_team_action_status(db, team_a.id, first.id, 40).await?;
    factory::create_team_action_status(db, team_a.id, second.id, 60).await?;
    factory::create_team_action_status(db, team_b.id, first.id, 70).await?;
    factory::create_team_action_status(db, team_b.id, second.id, 0).await?;

    let repo = TeamActionStatusRepository::new(db);
    let mut results = repo.sum_results_by_track(track.id).await?;
    results.sort_by_key(|r| r.team_id);

    assert_eq!(
        results,
        vec![
            TeamResult {
                team_id: team_a.id,
                total_value: 100
            },
            TeamResult {
                team_id: team_b.id,
                total_value: 70
            },
        ]
    );

    Ok(())
}

/// Tests that results from another track's timelines are not included.
///
/// Expected: Ok(vec) with only the submission made on the requested track
#[tokio::test]
async fn ignores_other_tracks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    let other = factory::helpers::create_completed_scored_track(db).await?;
    let timeline = factory::helpers::create_scoring_timeline(db, track.id, 1).await?;
    let other_timeline = factory::helpers::create_scoring_timeline(db, other.id, 1).await?;
    let team = factory::create_track_team(db, track.id).await?;
    let other_team = factory::create_track_team(db, other.id).await?;

    factory::create_team_action_status(db, team.id, timeline.id, 25).await?;
    factory::create_team_action_status(db, other_team.id, other_timeline.id, 90).await?;

    let repo = TeamActionStatusRepository::new(db);
    let results = repo.sum_results_by_track(track.id).await?;

    assert_eq!(
        results,
        vec![TeamResult {
            team_id: team.id,
            total_value: 25
        }]
    );

    Ok(())
}

/// Tests aggregating a track nobody has submitted results for.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_without_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    factory::helpers::create_scoring_timeline(db, track.id, 1).await?;
    factory::create_track_team(db, track.id).await?;

    let repo = TeamActionStatusRepository::new(db);
    let results = repo.sum_results_by_track(track.id).await?;

    assert!(results.is_empty());

    Ok(())
}
