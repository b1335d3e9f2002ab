use super::*;

/// Tests paging through six boats of one owner.
///
/// Verifies that the first page holds five boats and a cursor, and that the
/// cursor leads to a final page with the sixth boat and no cursor.
///
/// Expected: pages of 5 and 1 with count 6 on both
#[tokio::test]
async fn pages_through_owner_boats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..6 {
        ids.push(factory::create_boat_for_owner(db, "subject-a").await?.id);
    }

    let repo = BoatRepository::new(db);

    let first = repo.get_by_owner_paginated("subject-a", None).await?;
    assert_eq!(first.items.len(), 5);
    assert_eq!(first.count, 6);
    assert_eq!(first.next_cursor, Some(ids[4]));

    let second = repo
        .get_by_owner_paginated("subject-a", first.next_cursor)
        .await?;
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].id, ids[5]);
    assert_eq!(second.count, 6);
    assert!(second.next_cursor.is_none());

    Ok(())
}

/// Tests that listing is scoped to the owner.
///
/// Expected: only the owner's boats are listed and counted
#[tokio::test]
async fn excludes_other_owners_boats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let own = factory::create_boat_for_owner(db, "subject-a").await?;
    factory::create_boat_for_owner(db, "subject-b").await?;
    factory::create_boat_for_owner(db, "subject-b").await?;

    let repo = BoatRepository::new(db);
    let page = repo.get_by_owner_paginated("subject-a", None).await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, own.id);
    assert_eq!(page.count, 1);
    assert_eq!(repo.count_by_owner("subject-b").await?, 2);

    Ok(())
}

/// Tests that listed boats include their cargo.
///
/// Expected: each boat carries only its own cargo ids
#[tokio::test]
async fn includes_cargo_of_each_boat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (loaded, cargo) = factory::helpers::create_loaded_boat(db, "subject-a", 2).await?;
    let empty = factory::create_boat_for_owner(db, "subject-a").await?;

    let repo = BoatRepository::new(db);
    let page = repo.get_by_owner_paginated("subject-a", None).await?;

    let listed_loaded = page.items.iter().find(|b| b.id == loaded.id).unwrap();
    let listed_empty = page.items.iter().find(|b| b.id == empty.id).unwrap();

    assert_eq!(listed_loaded.cargo, vec![cargo[0].id, cargo[1].id]);
    assert!(listed_empty.cargo.is_empty());

    Ok(())
}

/// Tests listing for an owner with no boats.
///
/// Expected: empty page, zero count, no cursor
#[tokio::test]
async fn returns_empty_page_for_owner_without_boats() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BoatRepository::new(db);
    let page = repo.get_by_owner_paginated("nobody", None).await?;

    assert!(page.items.is_empty());
    assert_eq!(page.count, 0);
    assert!(page.next_cursor.is_none());

    Ok(())
}
