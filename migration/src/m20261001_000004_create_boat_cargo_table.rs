use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261001_000002_create_boat_table::Boat, m20261001_000003_create_cargo_table::Cargo};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoatCargo::Table)
                    .if_not_exists()
                    .col(pk_auto(BoatCargo::Id))
                    .col(integer(BoatCargo::BoatId))
                    .col(integer_uniq(BoatCargo::CargoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_boat_cargo_boat_id")
                            .from(BoatCargo::Table, BoatCargo::BoatId)
                            .to(Boat::Table, Boat::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_boat_cargo_cargo_id")
                            .from(BoatCargo::Table, BoatCargo::CargoId)
                            .to(Cargo::Table, Cargo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoatCargo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoatCargo {
    Table,
    Id,
    BoatId,
    CargoId,
}
