use super::*;

/// Tests paging through seven cargo items.
///
/// Expected: pages of 5 and 2, count 7, cursor only on the first page
#[tokio::test]
async fn pages_through_all_cargo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..7 {
        factory::create_cargo(db).await?;
    }

    let repo = CargoRepository::new(db);

    let first = repo.get_paginated(None).await?;
    assert_eq!(first.items.len(), 5);
    assert_eq!(first.count, 7);
    assert!(first.next_cursor.is_some());

    let second = repo.get_paginated(first.next_cursor).await?;
    assert_eq!(second.items.len(), 2);
    assert_eq!(second.count, 7);
    assert!(second.next_cursor.is_none());

    // Pages never overlap
    let last_on_first = first.items.last().unwrap().id;
    assert!(second.items.iter().all(|cargo| cargo.id > last_on_first));

    Ok(())
}
