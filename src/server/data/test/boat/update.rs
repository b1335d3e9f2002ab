use super::*;

/// Tests a partial update.
///
/// Verifies that only the fields present in the parameters are overwritten.
///
/// Expected: Ok(Some(Boat)) with the new name and the original type and length
#[tokio::test]
async fn overwrites_only_present_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let boat = factory::boat::BoatFactory::new(db)
        .name("Old Name")
        .kind("Ketch")
        .length(30)
        .build()
        .await?;

    let repo = BoatRepository::new(db);
    let updated = repo
        .update(
            boat.id,
            UpdateBoatParam {
                name: Some("New Name".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.kind, "Ketch");
    assert_eq!(updated.length, 30);

    Ok(())
}

/// Tests that updating keeps the cargo list.
///
/// Expected: cargo list unchanged after a full update
#[tokio::test]
async fn keeps_cargo_on_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (boat, cargo) = factory::helpers::create_loaded_boat(db, "subject-a", 1).await?;

    let repo = BoatRepository::new(db);
    let updated = repo
        .update(
            boat.id,
            UpdateBoatParam {
                name: Some("Renamed".to_string()),
                kind: Some("Barge".to_string()),
                length: Some(99),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.kind, "Barge");
    assert_eq!(updated.length, 99);
    assert_eq!(updated.cargo, vec![cargo[0].id]);

    Ok(())
}

/// Tests updating a boat that does not exist.
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
    let result = repo
        .update(
            99999,
            UpdateBoatParam {
                length: Some(1),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
