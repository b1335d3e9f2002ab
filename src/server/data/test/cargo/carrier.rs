use super::*;

/// Tests claiming unassigned cargo.
///
/// Expected: Ok(true) and the carrier is set
#[tokio::test]
async fn claims_unassigned_cargo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::create_boat(db).await?;
    let cargo = factory::create_cargo(db).await?;

    let repo = CargoRepository::new(db);

    assert!(repo.claim(cargo.id, boat.id).await?);
    assert_eq!(repo.get_by_id(cargo.id).await?.unwrap().carrier, Some(boat.id));

    Ok(())
}

/// Tests that carried cargo cannot be claimed again.
///
/// Expected: Ok(false) and the original carrier is kept
#[tokio::test]
async fn refuses_to_claim_carried_cargo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, cargo) = factory::helpers::create_loaded_boat(db, "subject-a", 1).await?;
    let other = factory::create_boat(db).await?;

    let repo = CargoRepository::new(db);

    assert!(!repo.claim(cargo[0].id, other.id).await?);
    assert_eq!(
        repo.get_by_id(cargo[0].id).await?.unwrap().carrier,
        Some(boat.id)
    );

    Ok(())
}

/// Tests releasing cargo.
///
/// Verifies that only the carrying boat can release the cargo.
///
/// Expected: Ok(false) for another boat, Ok(true) for the carrier
#[tokio::test]
async fn releases_only_from_carrier() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, cargo) = factory::helpers::create_loaded_boat(db, "subject-a", 1).await?;
    let other = factory::create_boat(db).await?;

    let repo = CargoRepository::new(db);

    assert!(!repo.release(cargo[0].id, other.id).await?);
    assert!(repo.release(cargo[0].id, boat.id).await?);
    assert!(repo.get_by_id(cargo[0].id).await?.unwrap().carrier.is_none());

    Ok(())
}

/// Tests releasing every cargo of a boat.
///
/// Expected: all three carriers cleared, other boats' cargo untouched
#[tokio::test]
async fn releases_all_cargo_of_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, cargo) = factory::helpers::create_loaded_boat(db, "subject-a", 3).await?;
    let (other, other_cargo) = factory::helpers::create_loaded_boat(db, "subject-a", 1).await?;

    let repo = CargoRepository::new(db);

    assert_eq!(repo.release_all(boat.id).await?, 3);

    for item in cargo {
        assert!(repo.get_by_id(item.id).await?.unwrap().carrier.is_none());
    }
    assert_eq!(
        repo.get_by_id(other_cargo[0].id).await?.unwrap().carrier,
        Some(other.id)
    );

    Ok(())
}
