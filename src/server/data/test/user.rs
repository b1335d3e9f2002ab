use crate::server::{data::user::UserRepository, model::user::CreateUserParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests recording a user.
///
/// Expected: Ok(User) with the given subject and display name
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            user_id: "subject-a".to_string(),
            display_name: "Ada Lovelace".to_string(),
        })
        .await?;

    assert_eq!(user.user_id, "subject-a");
    assert_eq!(user.display_name, "Ada Lovelace");

    Ok(())
}

/// Tests paging through users in insertion order.
///
/// Expected: pages of 5 and 1 with count 6
#[tokio::test]
async fn pages_through_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_boatyard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for _ in 0..6 {
        created.push(factory::create_user(db).await?);
    }

    let repo = UserRepository::new(db);

    let first = repo.get_paginated(None).await?;
    assert_eq!(first.items.len(), 5);
    assert_eq!(first.count, 6);
    assert_eq!(first.items[0].user_id, created[0].user_id);

    let second = repo.get_paginated(first.next_cursor).await?;
    assert_eq!(second.items.len(), 1);
    assert_eq!(second.items[0].user_id, created[5].user_id);
    assert!(second.next_cursor.is_none());

    Ok(())
}
