use super::*;

/// Tests creating a boat.
///
/// Verifies that the repository stores every field and that a new boat
/// starts with an empty cargo list.
///
/// Expected: Ok(Boat) with matching fields and no cargo
#[tokio::test]
async fn creates_boat_with_empty_cargo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoatRepository::new(db);
    let boat = repo
        .create(CreateBoatParam {
            name: "Sea Witch".to_string(),
            kind: "Schooner".to_string(),
            length: 42,
            owner: "subject-a".to_string(),
        })
        .await?;

    assert!(boat.id > 0);
    assert_eq!(boat.name, "Sea Witch");
    assert_eq!(boat.kind, "Schooner");
    assert_eq!(boat.length, 42);
    assert_eq!(boat.owner, "subject-a");
    assert!(boat.cargo.is_empty());

    let stored = repo.get_by_id(boat.id).await?;
    assert_eq!(stored, Some(boat));

    Ok(())
}
