use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::{
    boat::{Boat, CreateBoatParam, UpdateBoatParam},
    page::{Page, PAGE_SIZE},
};

pub struct BoatRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoatRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new boat with an empty cargo list
    pub async fn create(&self, param: CreateBoatParam) -> Result<Boat, DbErr> {
        let boat = entity::boat::ActiveModel {
            name: ActiveValue::Set(param.name),
            kind: ActiveValue::Set(param.kind),
            length: ActiveValue::Set(param.length),
            owner: ActiveValue::Set(param.owner),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Boat::from_entity(boat, Vec::new()))
    }

    /// Gets a boat by ID along with its cargo list in loading order
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Boat>, DbErr> {
        let Some(boat) = entity::prelude::Boat::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let cargo = entity::prelude::BoatCargo::find()
            .filter(entity::boat_cargo::Column::BoatId.eq(id))
            .order_by_asc(entity::boat_cargo::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(Boat::from_entity(boat, cargo)))
    }

    /// Gets the page of an owner's boats that follows `cursor`, ordered by ID.
    ///
    /// Fetches one boat beyond the page size to decide whether a next page exists.
    pub async fn get_by_owner_paginated(
        &self,
        owner: &str,
        cursor: Option<i32>,
    ) -> Result<Page<Boat>, DbErr> {
        let mut query =
            entity::prelude::Boat::find().filter(entity::boat::Column::Owner.eq(owner));
        if let Some(cursor) = cursor {
            query = query.filter(entity::boat::Column::Id.gt(cursor));
        }

        let rows = query
            .order_by_asc(entity::boat::Column::Id)
            .limit(PAGE_SIZE + 1)
            .all(self.db)
            .await?;

        let count = self.count_by_owner(owner).await?;

        // Load every listed boat's cargo in one query
        let boat_ids: Vec<i32> = rows.iter().map(|boat| boat.id).collect();
        let mut cargo_by_boat: HashMap<i32, Vec<entity::boat_cargo::Model>> = HashMap::new();
        if !boat_ids.is_empty() {
            let cargo_rows = entity::prelude::BoatCargo::find()
                .filter(entity::boat_cargo::Column::BoatId.is_in(boat_ids))
                .order_by_asc(entity::boat_cargo::Column::Id)
                .all(self.db)
                .await?;

            for row in cargo_rows {
                cargo_by_boat.entry(row.boat_id).or_default().push(row);
            }
        }

        let boats = rows
            .into_iter()
            .map(|boat| {
                let cargo = cargo_by_boat.remove(&boat.id).unwrap_or_default();
                Boat::from_entity(boat, cargo)
            })
            .collect();

        Ok(Page::from_lookahead(boats, count, |boat| boat.id))
    }

    /// Counts all boats owned by the given subject identifier
    pub async fn count_by_owner(&self, owner: &str) -> Result<u64, DbErr> {
        entity::prelude::Boat::find()
            .filter(entity::boat::Column::Owner.eq(owner))
            .count(self.db)
            .await
    }

    /// Overwrites the fields present in `param` and returns the refreshed boat.
    ///
    /// Returns `Ok(None)` if no boat with the ID exists.
    pub async fn update(&self, id: i32, param: UpdateBoatParam) -> Result<Option<Boat>, DbErr> {
        let Some(boat) = entity::prelude::Boat::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = boat.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(kind) = param.kind {
            active.kind = ActiveValue::Set(kind);
        }
        if let Some(length) = param.length {
            active.length = ActiveValue::Set(length);
        }

        if active.is_changed() {
            active.update(self.db).await?;
        }

        self.get_by_id(id).await
    }

    /// Deletes a boat, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Boat::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
