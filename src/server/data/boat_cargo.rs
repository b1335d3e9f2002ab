//! Join rows forming each boat's ordered cargo list.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct BoatCargoRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoatCargoRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends cargo to the end of a boat's cargo list.
    ///
    /// Fails with a unique constraint violation if the cargo is already listed on any boat.
    pub async fn append(&self, boat_id: i32, cargo_id: i32) -> Result<(), DbErr> {
        entity::boat_cargo::ActiveModel {
            boat_id: ActiveValue::Set(boat_id),
            cargo_id: ActiveValue::Set(cargo_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes cargo from a boat's list, returning whether it was listed
    pub async fn remove(&self, boat_id: i32, cargo_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BoatCargo::delete_many()
            .filter(entity::boat_cargo::Column::BoatId.eq(boat_id))
            .filter(entity::boat_cargo::Column::CargoId.eq(cargo_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Empties a boat's cargo list, returning the number of removed entries
    pub async fn remove_all(&self, boat_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::BoatCargo::delete_many()
            .filter(entity::boat_cargo::Column::BoatId.eq(boat_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
