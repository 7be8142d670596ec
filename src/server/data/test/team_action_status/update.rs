use super::*;

/// Tests that a zero result value is written rather than treated as "unset".
///
/// Expected: Ok(Some(status)) with result_value 0 and unchanged notes
#[tokio::test]
async fn writes_zero_result_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_scoring_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let track = factory::helpers::create_completed_scored_track(db).await?;
    let timeline = factory::helpers::create_scoring_timeline(db, track.id, 1).await?;
    let team = factory::create_track_team(db, track.id).await?;
    let created = factory::create_team_action_status(db, team.id, timeline.id, 80).await?;

    let repo = TeamActionStatusRepository::new(db);
    let updated = repo
        .update(UpdateTeamActionStatusParams {
            track_team_id: team.id,
            timeline_id: timeline.id,
            result_value: Some(0),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.result_value, 0);
    assert_eq!(updated.notes, created.notes);
    assert_eq!(updated.resolution_link, created.resolution_link);

    Ok(())
}
