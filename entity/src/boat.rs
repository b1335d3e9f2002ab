use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "boat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub length: i32,
    /// Subject identifier of the owning user.
    pub owner: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::boat_cargo::Entity")]
    BoatCargo,
    #[sea_orm(has_many = "super::cargo::Entity")]
    Cargo,
}

impl Related<super::boat_cargo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoatCargo.def()
    }
}

impl Related<super::cargo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cargo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
