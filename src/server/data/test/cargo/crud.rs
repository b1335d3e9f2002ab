use super::*;

/// Tests creating cargo.
///
/// Expected: Ok(Cargo) with matching fields and no carrier
#[tokio::test]
async fn creates_unassigned_cargo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CargoRepository::new(db);
    let cargo = repo
        .create(CreateCargoParam {
            volume: 12,
            content: "Lemons".to_string(),
            creation_date: "10/12/2021".to_string(),
        })
        .await?;

    assert_eq!(cargo.volume, 12);
    assert_eq!(cargo.content, "Lemons");
    assert_eq!(cargo.creation_date, "10/12/2021");
    assert!(cargo.carrier.is_none());

    assert_eq!(repo.get_by_id(cargo.id).await?, Some(cargo));

    Ok(())
}

/// Tests a partial update.
///
/// Expected: only the content changes
#[tokio::test]
async fn overwrites_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cargo = factory::cargo::CargoFactory::new(db)
        .volume(3)
        .content("Apples")
        .build()
        .await?;

    let repo = CargoRepository::new(db);
    let updated = repo
        .update(
            cargo.id,
            UpdateCargoParam {
                content: Some("Pears".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.content, "Pears");
    assert_eq!(updated.volume, 3);
    assert_eq!(updated.creation_date, cargo.creation_date);

    Ok(())
}

/// Tests that an update never touches the carrier.
///
/// Expected: carrier unchanged after updating every other field
#[tokio::test]
async fn keeps_carrier_on_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, cargo) = factory::helpers::create_loaded_boat(db, "subject-a", 1).await?;

    let repo = CargoRepository::new(db);
    let updated = repo
        .update(
            cargo[0].id,
            UpdateCargoParam {
                volume: Some(50),
                content: Some("Rope".to_string()),
                creation_date: Some("01/01/2022".to_string()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.carrier, Some(boat.id));

    Ok(())
}

/// Tests reading, updating and deleting cargo that does not exist.
///
/// Expected: Ok(None), Ok(None), Ok(false)
#[tokio::test]
async fn handles_nonexistent_cargo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CargoRepository::new(db);

    assert!(repo.get_by_id(99999).await?.is_none());
    assert!(repo
        .update(99999, UpdateCargoParam::default())
        .await?
        .is_none());
    assert!(!repo.delete(99999).await?);

    Ok(())
}

/// Tests deleting cargo.
///
/// Expected: Ok(true) and the cargo is gone
#[tokio::test]
async fn deletes_cargo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cargo = factory::create_cargo(db).await?;

    let repo = CargoRepository::new(db);

    assert!(repo.delete(cargo.id).await?);
    assert!(repo.get_by_id(cargo.id).await?.is_none());

    Ok(())
}
