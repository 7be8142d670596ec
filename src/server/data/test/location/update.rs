use super::*;

/// Tests that an absent description is left unchanged.
///
/// Expected: Ok(Some(location)) with the new title and original description
#[tokio::test]
async fn keeps_description_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::LocationFactory::new(db)
        .description(Some("Second floor".to_string()))
        .build()
        .await?;

    let repo = LocationRepository::new(db);
    let updated = repo
        .update(UpdateLocationParams {
            id: location.id,
            title: Some("Main Hall".to_string()),
            description: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Main Hall");
    assert_eq!(updated.description, Some("Second floor".to_string()));

    Ok(())
}

/// Tests that an explicit null clears the description.
///
/// Expected: Ok(Some(location)) with description None
#[tokio::test]
async fn clears_description_when_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::LocationFactory::new(db)
        .description(Some("Second floor".to_string()))
        .build()
        .await?;

    let repo = LocationRepository::new(db);
    let updated = repo
        .update(UpdateLocationParams {
            id: location.id,
            title: None,
            description: Some(None),
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, location.title);
    assert_eq!(updated.description, None);

    Ok(())
}
