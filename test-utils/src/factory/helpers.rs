//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Puts a cargo on a boat, writing both sides of the association.
///
/// Sets the cargo's carrier to the boat and appends the cargo to the boat's
/// cargo list.
///
/// # Returns
/// - `Ok(entity::cargo::Model)` - The cargo with its carrier set
/// - `Err(DbErr)` - Database error during either write
pub async fn load_cargo(
    db: &DatabaseConnection,
    boat: &entity::boat::Model,
    cargo: &entity::cargo::Model,
) -> Result<entity::cargo::Model, DbErr> {
    let mut active = cargo.clone().into_active_model();
    active.carrier = ActiveValue::Set(Some(boat.id));
    let cargo = active.update(db).await?;

    entity::boat_cargo::ActiveModel {
        boat_id: ActiveValue::Set(boat.id),
        cargo_id: ActiveValue::Set(cargo.id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(cargo)
}

/// Creates a boat carrying `count` freshly created cargo items.
///
/// # Returns
/// - `Ok((boat, cargo))` - The boat and its cargo in loading order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_loaded_boat(
    db: &DatabaseConnection,
    owner: &str,
    count: usize,
) -> Result<(entity::boat::Model, Vec<entity::cargo::Model>), DbErr> {
    let boat = crate::factory::boat::create_boat_for_owner(db, owner).await?;

    let mut cargo = Vec::with_capacity(count);
    for _ in 0..count {
        let item = crate::factory::cargo::create_cargo(db).await?;
        cargo.push(load_cargo(db, &boat, &item).await?);
    }

    Ok((boat, cargo))
}
