use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    cargo::{Cargo, CreateCargoParam, UpdateCargoParam},
    page::{Page, PAGE_SIZE},
};

pub struct CargoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CargoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates new cargo with no carrier
    pub async fn create(&self, param: CreateCargoParam) -> Result<Cargo, DbErr> {
        let cargo = entity::cargo::ActiveModel {
            volume: ActiveValue::Set(param.volume),
            content: ActiveValue::Set(param.content),
            creation_date: ActiveValue::Set(param.creation_date),
            carrier: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Cargo::from_entity(cargo))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Cargo>, DbErr> {
        let cargo = entity::prelude::Cargo::find_by_id(id).one(self.db).await?;

        Ok(cargo.map(Cargo::from_entity))
    }

    /// Gets the page of cargo that follows `cursor`, ordered by ID
    pub async fn get_paginated(&self, cursor: Option<i32>) -> Result<Page<Cargo>, DbErr> {
        let mut query = entity::prelude::Cargo::find();
        if let Some(cursor) = cursor {
            query = query.filter(entity::cargo::Column::Id.gt(cursor));
        }

        let rows = query
            .order_by_asc(entity::cargo::Column::Id)
            .limit(PAGE_SIZE + 1)
            .all(self.db)
            .await?;

        let count = entity::prelude::Cargo::find().count(self.db).await?;

        let cargo = rows.into_iter().map(Cargo::from_entity).collect();

        Ok(Page::from_lookahead(cargo, count, |cargo| cargo.id))
    }

    /// Overwrites the fields present in `param` and returns the refreshed cargo.
    ///
    /// The carrier is never touched here; it only changes through `claim` and `release`.
    pub async fn update(&self, id: i32, param: UpdateCargoParam) -> Result<Option<Cargo>, DbErr> {
        let Some(cargo) = entity::prelude::Cargo::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = cargo.clone().into_active_model();
        if let Some(volume) = param.volume {
            active.volume = ActiveValue::Set(volume);
        }
        if let Some(content) = param.content {
            active.content = ActiveValue::Set(content);
        }
        if let Some(creation_date) = param.creation_date {
            active.creation_date = ActiveValue::Set(creation_date);
        }

        if !active.is_changed() {
            return Ok(Some(Cargo::from_entity(cargo)));
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Cargo::from_entity(updated)))
    }

    /// Sets the carrier of unassigned cargo.
    ///
    /// The update only matches cargo whose carrier is NULL, so of two concurrent
    /// claims at most one succeeds.
    ///
    /// # Returns
    /// - `Ok(true)` - The cargo is now carried by `boat_id`
    /// - `Ok(false)` - The cargo does not exist or already has a carrier
    pub async fn claim(&self, cargo_id: i32, boat_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Cargo::update_many()
            .set(entity::cargo::ActiveModel {
                carrier: ActiveValue::Set(Some(boat_id)),
                ..Default::default()
            })
            .filter(entity::cargo::Column::Id.eq(cargo_id))
            .filter(entity::cargo::Column::Carrier.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Clears the carrier of cargo carried by `boat_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - The carrier was cleared
    /// - `Ok(false)` - The cargo does not exist or is not carried by `boat_id`
    pub async fn release(&self, cargo_id: i32, boat_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Cargo::update_many()
            .set(entity::cargo::ActiveModel {
                carrier: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::cargo::Column::Id.eq(cargo_id))
            .filter(entity::cargo::Column::Carrier.eq(boat_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Clears the carrier of every cargo carried by `boat_id`, returning how many changed
    pub async fn release_all(&self, boat_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Cargo::update_many()
            .set(entity::cargo::ActiveModel {
                carrier: ActiveValue::Set(None),
                ..Default::default()
            })
            .filter(entity::cargo::Column::Carrier.eq(boat_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes cargo, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Cargo::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
