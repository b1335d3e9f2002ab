use super::*;

/// Tests deleting carried cargo.
///
/// Expected: cargo gone and removed from its carrier's list
#[tokio::test]
async fn delete_unloads_from_carrier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, cargo) = factory::helpers::create_loaded_boat(db, "subject-a", 2).await?;

    let service = CargoService::new(db);
    assert!(service.delete(cargo[0].id).await?);

    assert!(service.get(cargo[0].id).await?.is_none());
    let boat = BoatService::new(db).get(boat.id).await?.unwrap();
    assert_eq!(boat.cargo, vec![cargo[1].id]);

    Ok(())
}

/// Tests deleting unassigned cargo.
#[tokio::test]
async fn delete_unassigned_cargo() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cargo = factory::create_cargo(db).await?;

    let service = CargoService::new(db);
    assert!(service.delete(cargo.id).await?);
    assert!(!service.delete(cargo.id).await?);

    Ok(())
}
