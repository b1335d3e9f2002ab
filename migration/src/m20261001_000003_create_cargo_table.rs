use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000002_create_boat_table::Boat;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cargo::Table)
                    .if_not_exists()
                    .col(pk_auto(Cargo::Id))
                    .col(integer(Cargo::Volume))
                    .col(string(Cargo::Content))
                    .col(string(Cargo::CreationDate))
                    .col(integer_null(Cargo::Carrier))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cargo_carrier")
                            .from(Cargo::Table, Cargo::Carrier)
                            .to(Boat::Table, Boat::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cargo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cargo {
    Table,
    Id,
    Volume,
    Content,
    CreationDate,
    Carrier,
}
