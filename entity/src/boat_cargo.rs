//! A boat's cargo list. The auto-increment key keeps insertion order and the
//! unique `cargo_id` allows a cargo on at most one boat.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "boat_cargo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub boat_id: i32,
    #[sea_orm(unique)]
    pub cargo_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::boat::Entity",
        from = "Column::BoatId",
        to = "super::boat::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Boat,
    #[sea_orm(
        belongs_to = "super::cargo::Entity",
        from = "Column::CargoId",
        to = "super::cargo::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Cargo,
}

impl Related<super::boat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Boat.def()
    }
}

impl Related<super::cargo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cargo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
