//! Boat service for business logic.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::boat::BoatRepository,
    error::AppError,
    model::{
        boat::{Boat, CreateBoatParam, UpdateBoatParam},
        page::Page,
    },
    service::association::AssociationService,
};

pub struct BoatService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BoatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateBoatParam) -> Result<Boat, AppError> {
        let boat = BoatRepository::new(self.db).create(param).await?;

        Ok(boat)
    }

    pub async fn get(&self, id: i32) -> Result<Option<Boat>, AppError> {
        let boat = BoatRepository::new(self.db).get_by_id(id).await?;

        Ok(boat)
    }

    /// Lists the owner's boats, five per page.
    ///
    /// # Arguments
    /// - `owner` - Subject identifier of the caller
    /// - `cursor` - Key of the last boat on the previous page, if any
    ///
    /// # Returns
    /// - `Ok(Page<Boat>)` - Boats on this page plus the owner's total boat count
    pub async fn list_by_owner(
        &self,
        owner: &str,
        cursor: Option<i32>,
    ) -> Result<Page<Boat>, AppError> {
        let page = BoatRepository::new(self.db)
            .get_by_owner_paginated(owner, cursor)
            .await?;

        Ok(page)
    }

    pub async fn update(&self, id: i32, param: UpdateBoatParam) -> Result<Option<Boat>, AppError> {
        let boat = BoatRepository::new(self.db).update(id, param).await?;

        Ok(boat)
    }

    /// Deletes a boat after clearing the carrier of all its cargo.
    ///
    /// Both steps share one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Boat deleted
    /// - `Ok(false)` - No boat with that ID existed
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let released = AssociationService::cascade_detach_all(&txn, id).await?;
        let deleted = BoatRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        if deleted {
            tracing::debug!("Deleted boat {} and released {} cargo", id, released);
        }

        Ok(deleted)
    }
}
