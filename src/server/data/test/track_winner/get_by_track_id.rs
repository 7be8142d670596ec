use super::*;

/// Tests that a track's standings come back ordered by place.
///
/// Expected: Ok(vec) ordered by place ascending, count matching
#[tokio::test]
async fn orders_by_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    let first = factory::create_track_team(db, track.id).await?;
    let second = factory::create_track_team(db, track.id).await?;

    factory::create_track_winner(db, track.id, second.id, 1, false).await?;
    factory::create_track_winner(db, track.id, first.id, 0, true).await?;

    let repo = TrackWinnerRepository::new(db);
    let winners = repo.get_by_track_id(track.id).await?;

    let teams: Vec<i32> = winners.iter().map(|w| w.track_team_id).collect();
    assert_eq!(teams, vec![first.id, second.id]);
    assert!(winners[0].is_awardee);
    assert_eq!(repo.count_by_track_id(track.id).await?, 2);

    Ok(())
}
