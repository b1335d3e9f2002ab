//! Boat factory for creating test boat entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test boats with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let boat = BoatFactory::new(&db)
///     .name("Sea Witch")
///     .kind("Schooner")
///     .length(42)
///     .owner("subject-a")
///     .build()
///     .await?;
/// ```
pub struct BoatFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    kind: String,
    length: i32,
    owner: String,
}

impl<'a> BoatFactory<'a> {
    /// Creates a new BoatFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Boat {id}"`
    /// - kind: `"Sloop"`
    /// - length: `28`
    /// - owner: `"owner-{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Boat {}", id),
            kind: "Sloop".to_string(),
            length: 28,
            owner: format!("owner-{}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn length(mut self, length: i32) -> Self {
        self.length = length;
        self
    }

    /// Sets the owning subject identifier.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Builds and inserts the boat entity into the database.
    pub async fn build(self) -> Result<entity::boat::Model, DbErr> {
        entity::boat::ActiveModel {
            name: ActiveValue::Set(self.name),
            kind: ActiveValue::Set(self.kind),
            length: ActiveValue::Set(self.length),
            owner: ActiveValue::Set(self.owner),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a boat with default values.
pub async fn create_boat(db: &DatabaseConnection) -> Result<entity::boat::Model, DbErr> {
    BoatFactory::new(db).build().await
}

/// Creates a boat owned by the given subject identifier.
pub async fn create_boat_for_owner(
    db: &DatabaseConnection,
    owner: &str,
) -> Result<entity::boat::Model, DbErr> {
    BoatFactory::new(db).owner(owner).build().await
}
