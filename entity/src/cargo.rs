use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cargo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub volume: i32,
    pub content: String,
    pub creation_date: String,
    /// Boat currently carrying this cargo.
    pub carrier: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::boat::Entity",
        from = "Column::Carrier",
        to = "super::boat::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Boat,
    #[sea_orm(has_one = "super::boat_cargo::Entity")]
    BoatCargo,
}

impl Related<super::boat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Boat.def()
    }
}

impl Related<super::boat_cargo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoatCargo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
