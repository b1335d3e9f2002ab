use super::*;

/// Tests deleting a boat.
///
/// Expected: Ok(true) and the boat can no longer be read
#[tokio::test]
async fn deletes_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::create_boat(db).await?;

    let repo = BoatRepository::new(db);

    assert!(repo.delete(boat.id).await?);
    assert!(repo.get_by_id(boat.id).await?.is_none());

    Ok(())
}

/// Tests deleting a boat that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoatRepository::new(db);

    assert!(!repo.delete(99999).await?);

    Ok(())
}
