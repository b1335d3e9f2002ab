//! Cargo factory for creating test cargo entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating unassigned test cargo with customizable fields.
///
/// Use `helpers::load_cargo` to put the cargo on a boat.
pub struct CargoFactory<'a> {
    db: &'a DatabaseConnection,
    volume: i32,
    content: String,
    creation_date: String,
}

impl<'a> CargoFactory<'a> {
    /// Creates a new CargoFactory with default values.
    ///
    /// Defaults:
    /// - volume: `10`
    /// - content: `"Crate {id}"`
    /// - creation_date: `"2021-01-01"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            volume: 10,
            content: format!("Crate {}", id),
            creation_date: "2021-01-01".to_string(),
        }
    }

    pub fn volume(mut self, volume: i32) -> Self {
        self.volume = volume;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn creation_date(mut self, creation_date: impl Into<String>) -> Self {
        self.creation_date = creation_date.into();
        self
    }

    /// Builds and inserts the cargo entity with no carrier.
    pub async fn build(self) -> Result<entity::cargo::Model, DbErr> {
        entity::cargo::ActiveModel {
            volume: ActiveValue::Set(self.volume),
            content: ActiveValue::Set(self.content),
            creation_date: ActiveValue::Set(self.creation_date),
            carrier: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates cargo with default values.
pub async fn create_cargo(db: &DatabaseConnection) -> Result<entity::cargo::Model, DbErr> {
    CargoFactory::new(db).build().await
}
