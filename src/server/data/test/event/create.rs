use super::*;

/// Tests that new events start in the scheduled state.
///
/// Expected: Ok(event) with status Scheduled and matching fields
#[tokio::test]
async fn creates_scheduled_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = factory::create_date(db).await?;

    let repo = EventRepository::new(db);
    let event = repo
        .create(CreateEventParams {
            title: "Spring Hackathon".to_string(),
            description: "48 hours".to_string(),
            redirect_link: "https://example.com".to_string(),
            date_id: date.id,
        })
        .await?;

    assert_eq!(event.title, "Spring Hackathon");
    assert_eq!(event.status, LifecycleStatus::Scheduled);
    assert_eq!(event.date_id, date.id);

    Ok(())
}

/// Tests that event titles are unique.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = factory::create_date(db).await?;
    let params = CreateEventParams {
        title: "Only Once".to_string(),
        description: String::new(),
        redirect_link: String::new(),
        date_id: date.id,
    };

    let repo = EventRepository::new(db);
    repo.create(params.clone()).await?;
    let result = repo.create(params).await;

    assert!(result.is_err());

    Ok(())
}
