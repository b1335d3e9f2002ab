//! Boat and cargo association bookkeeping.
//!
//! A link is stored twice: as the cargo's `carrier` and as an entry in the boat's
//! cargo list. Every operation here writes both sides inside one transaction so a
//! failure between the writes leaves neither behind.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{boat::BoatRepository, boat_cargo::BoatCargoRepository, cargo::CargoRepository},
    error::{association::AssociationError, AppError},
    model::boat::Boat,
};

pub struct AssociationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AssociationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Puts cargo on a boat.
    ///
    /// The cargo is claimed with a conditional update, so when two requests race to
    /// load the same cargo exactly one of them succeeds.
    ///
    /// # Arguments
    /// - `boat` - Boat the caller is allowed to modify
    /// - `cargo_id` - Cargo to load
    ///
    /// # Returns
    /// - `Ok(Boat)` - The boat with the cargo appended to its list
    /// - `Err(AssociationError::NotFound)` - Cargo does not exist
    /// - `Err(AssociationError::Conflict)` - Cargo already has a carrier
    /// - `Err(AppError::DbErr)` - Database error, nothing was written
    pub async fn attach(&self, boat: &Boat, cargo_id: i32) -> Result<Boat, AppError> {
        let txn = self.db.begin().await?;

        let cargo_repo = CargoRepository::new(&txn);
        let cargo = cargo_repo
            .get_by_id(cargo_id)
            .await?
            .ok_or(AssociationError::NotFound)?;

        if cargo.carrier.is_some() || !cargo_repo.claim(cargo_id, boat.id).await? {
            return Err(AssociationError::Conflict.into());
        }

        BoatCargoRepository::new(&txn)
            .append(boat.id, cargo_id)
            .await
            .map_err(conflict_on_unique_violation)?;

        let loaded = BoatRepository::new(&txn)
            .get_by_id(boat.id)
            .await?
            .ok_or(AssociationError::NotFound)?;

        txn.commit().await?;

        tracing::debug!("Loaded cargo {} onto boat {}", cargo_id, boat.id);

        Ok(loaded)
    }

    /// Takes cargo off a boat.
    ///
    /// # Returns
    /// - `Ok(Boat)` - The boat with the cargo removed from its list
    /// - `Err(AssociationError::NotFound)` - Cargo does not exist
    /// - `Err(AssociationError::CarrierMismatch)` - Cargo is carried by another boat or none
    /// - `Err(AssociationError::NotListed)` - Boat's list does not contain the cargo
    pub async fn detach(&self, boat: &Boat, cargo_id: i32) -> Result<Boat, AppError> {
        let txn = self.db.begin().await?;

        let cargo_repo = CargoRepository::new(&txn);
        let cargo = cargo_repo
            .get_by_id(cargo_id)
            .await?
            .ok_or(AssociationError::NotFound)?;

        if cargo.carrier != Some(boat.id) {
            return Err(AssociationError::CarrierMismatch.into());
        }

        if !BoatCargoRepository::new(&txn)
            .remove(boat.id, cargo_id)
            .await?
        {
            return Err(AssociationError::NotListed.into());
        }

        if !cargo_repo.release(cargo_id, boat.id).await? {
            return Err(AssociationError::CarrierMismatch.into());
        }

        let unloaded = BoatRepository::new(&txn)
            .get_by_id(boat.id)
            .await?
            .ok_or(AssociationError::NotFound)?;

        txn.commit().await?;

        tracing::debug!("Unloaded cargo {} from boat {}", cargo_id, boat.id);

        Ok(unloaded)
    }

    /// Clears both sides of every link held by a boat.
    ///
    /// Runs on the caller's connection so boat deletion can include it in its own
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of cargo items whose carrier was cleared
    pub async fn cascade_detach_all<C: ConnectionTrait>(
        db: &C,
        boat_id: i32,
    ) -> Result<u64, DbErr> {
        let released = CargoRepository::new(db).release_all(boat_id).await?;
        BoatCargoRepository::new(db).remove_all(boat_id).await?;

        Ok(released)
    }
}

/// Maps a unique index violation on the cargo list to `Conflict`.
fn conflict_on_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AssociationError::Conflict.into(),
        _ => err.into(),
    }
}
