//! Cargo service for business logic.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{boat_cargo::BoatCargoRepository, cargo::CargoRepository},
    error::AppError,
    model::{
        cargo::{Cargo, CreateCargoParam, UpdateCargoParam},
        page::Page,
    },
};

pub struct CargoService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CargoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCargoParam) -> Result<Cargo, AppError> {
        let cargo = CargoRepository::new(self.db).create(param).await?;

        Ok(cargo)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Cargo>, AppError> {
        let cargo = CargoRepository::new(self.db).get_by_id(id).await?;

        Ok(cargo)
    }

    pub async fn list(&self, cursor: Option<i32>) -> Result<Page<Cargo>, AppError> {
        let page = CargoRepository::new(self.db).get_paginated(cursor).await?;

        Ok(page)
    }

    pub async fn update(
        &self,
        id: i32,
        param: UpdateCargoParam,
    ) -> Result<Option<Cargo>, AppError> {
        let cargo = CargoRepository::new(self.db).update(id, param).await?;

        Ok(cargo)
    }

    /// Deletes cargo, first taking it off its carrier if it has one.
    ///
    /// # Returns
    /// - `Ok(true)` - Cargo deleted
    /// - `Ok(false)` - No cargo with that ID existed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let cargo_repo = CargoRepository::new(&txn);
        let Some(cargo) = cargo_repo.get_by_id(id).await? else {
            return Ok(false);
        };

        if let Some(carrier) = cargo.carrier {
            BoatCargoRepository::new(&txn).remove(carrier, id).await?;
            cargo_repo.release(id, carrier).await?;
        }

        let deleted = cargo_repo.delete(id).await?;

        txn.commit().await?;

        Ok(deleted)
    }
}
