use super::*;

/// Tests reading a boat that carries cargo.
///
/// Verifies that the cargo list is returned in the order the cargo was loaded,
/// not in cargo ID order.
///
/// Expected: Ok(Some(Boat)) with cargo in loading order
#[tokio::test]
async fn returns_cargo_in_loading_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::create_boat(db).await?;
    let first = factory::create_cargo(db).await?;
    let second = factory::create_cargo(db).await?;

    factory::helpers::load_cargo(db, &boat, &second).await?;
    factory::helpers::load_cargo(db, &boat, &first).await?;

    let repo = BoatRepository::new(db);
    let result = repo.get_by_id(boat.id).await?.unwrap();

    assert_eq!(result.cargo, vec![second.id, first.id]);

    Ok(())
}

/// Tests reading a boat that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoatRepository::new(db);
    let result = repo.get_by_id(99999).await?;

    assert!(result.is_none());

    Ok(())
}
