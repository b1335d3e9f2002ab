//! Cargo domain models and parameters.

use crate::{
    model::cargo::{CargoDto, CargoListDto},
    server::{model::page::Page, util::url::LinkBuilder},
};

pub const CARGO_PATH: &str = "cargo";

#[derive(Debug, Clone, PartialEq)]
pub struct Cargo {
    pub id: i32,
    pub volume: i32,
    pub content: String,
    pub creation_date: String,
    /// Id of the boat carrying this cargo, if any.
    pub carrier: Option<i32>,
}

impl Cargo {
    pub fn from_entity(entity: entity::cargo::Model) -> Self {
        Self {
            id: entity.id,
            volume: entity.volume,
            content: entity.content,
            creation_date: entity.creation_date,
            carrier: entity.carrier,
        }
    }

    pub fn into_dto(self, links: &LinkBuilder) -> CargoDto {
        CargoDto {
            self_url: links.resource(CARGO_PATH, self.id),
            id: self.id,
            volume: self.volume,
            content: self.content,
            creation_date: self.creation_date,
            carrier: self.carrier,
        }
    }
}

impl Page<Cargo> {
    pub fn into_dto(self, links: &LinkBuilder) -> CargoListDto {
        CargoListDto {
            next: self
                .next_cursor
                .map(|cursor| links.next_page(CARGO_PATH, cursor)),
            count: self.count,
            cargo: self
                .items
                .into_iter()
                .map(|cargo| cargo.into_dto(links))
                .collect(),
        }
    }
}

/// Parameters for creating unassigned cargo.
#[derive(Debug, Clone)]
pub struct CreateCargoParam {
    pub volume: i32,
    pub content: String,
    pub creation_date: String,
}

/// Parameters for updating cargo. Only `Some` fields overwrite stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateCargoParam {
    pub volume: Option<i32>,
    pub content: Option<String>,
    pub creation_date: Option<String>,
}
