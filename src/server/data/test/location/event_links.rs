use super::*;

/// Tests linking and unlinking locations on an event.
///
/// Expected: both locations listed after linking, one after removing the first
#[tokio::test]
async fn links_and_unlinks_event_locations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_date, event) = factory::helpers::create_event_with_date(db).await?;
    let hall = factory::create_location(db).await?;
    let lab = factory::create_location(db).await?;

    let repo = LocationRepository::new(db);
    repo.add_to_event(event.id, hall.id).await?;
    repo.add_to_event(event.id, lab.id).await?;

    let linked = repo.get_by_event_id(event.id).await?;
    assert_eq!(linked.len(), 2);

    assert!(repo.remove_from_event(event.id, hall.id).await?);
    assert!(!repo.remove_from_event(event.id, hall.id).await?);

    let linked = repo.get_by_event_id(event.id).await?;
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, lab.id);

    Ok(())
}

/// Tests linking the same location to an event twice.
///
/// Expected: Err(DbErr) from the composite primary key
#[tokio::test]
async fn rejects_duplicate_event_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_date, event) = factory::helpers::create_event_with_date(db).await?;
    let hall = factory::create_location(db).await?;

    let repo = LocationRepository::new(db);
    repo.add_to_event(event.id, hall.id).await?;
    let result = repo.add_to_event(event.id, hall.id).await;

    assert!(result.is_err());

    Ok(())
}
