//! Boat domain models and parameters.
//!
//! A boat belongs to the user whose subject identifier is stored in `owner` and
//! carries an ordered list of cargo ids, kept in the `boat_cargo` table.

use crate::{
    model::boat::{BoatDto, BoatListDto, CargoRefDto},
    server::{model::page::Page, util::url::LinkBuilder},
};

pub const BOATS_PATH: &str = "boats";

/// Boat with its ordered cargo list.
#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub length: i32,
    /// Subject identifier of the owning user.
    pub owner: String,
    /// Ids of carried cargo in the order they were loaded.
    pub cargo: Vec<i32>,
}

impl Boat {
    /// Converts an entity model and its join rows to a boat domain model.
    ///
    /// # Arguments
    /// - `entity` - The boat row
    /// - `cargo` - Join rows for the boat, already ordered by insertion
    pub fn from_entity(entity: entity::boat::Model, cargo: Vec<entity::boat_cargo::Model>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            kind: entity.kind,
            length: entity.length,
            owner: entity.owner,
            cargo: cargo.into_iter().map(|row| row.cargo_id).collect(),
        }
    }

    pub fn is_owned_by(&self, subject: &str) -> bool {
        self.owner == subject
    }

    /// Converts the boat to a DTO with absolute links for the boat and its cargo.
    pub fn into_dto(self, links: &LinkBuilder) -> BoatDto {
        BoatDto {
            self_url: links.resource(BOATS_PATH, self.id),
            id: self.id,
            name: self.name,
            kind: self.kind,
            length: self.length,
            owner: self.owner,
            cargo: self
                .cargo
                .into_iter()
                .map(|id| CargoRefDto {
                    id,
                    self_url: links.resource(super::cargo::CARGO_PATH, id),
                })
                .collect(),
        }
    }
}

impl Page<Boat> {
    pub fn into_dto(self, links: &LinkBuilder) -> BoatListDto {
        BoatListDto {
            next: self
                .next_cursor
                .map(|cursor| links.next_page(BOATS_PATH, cursor)),
            count: self.count,
            boats: self
                .items
                .into_iter()
                .map(|boat| boat.into_dto(links))
                .collect(),
        }
    }
}

/// Parameters for creating a boat owned by the caller.
#[derive(Debug, Clone)]
pub struct CreateBoatParam {
    pub name: String,
    pub kind: String,
    pub length: i32,
    pub owner: String,
}

/// Parameters for updating a boat.
///
/// Only `Some` fields overwrite stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateBoatParam {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub length: Option<i32>,
}

/// Returns true when a boat name is ASCII letters, digits or spaces and at
/// least three characters long.
pub fn is_valid_boat_name(name: &str) -> bool {
    name.len() >= 3 && name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;

    fn links() -> LinkBuilder {
        LinkBuilder::new(Url::parse("http://localhost:8080").unwrap())
    }

    #[test]
    fn accepts_alphanumeric_names_with_spaces() {
        assert!(is_valid_boat_name("Sea Witch 2"));
        assert!(is_valid_boat_name("abc"));
    }

    #[test]
    fn rejects_short_or_symbolic_names() {
        assert!(!is_valid_boat_name("ab"));
        assert!(!is_valid_boat_name("Sea-Witch"));
        assert!(!is_valid_boat_name("Bateau é"));
    }

    #[test]
    fn dto_links_boat_and_nested_cargo() {
        let boat = Boat {
            id: 4,
            name: "Odyssey".to_string(),
            kind: "Yacht".to_string(),
            length: 28,
            owner: "subject-1".to_string(),
            cargo: vec![9, 2],
        };

        let dto = boat.into_dto(&links());

        assert_eq!(dto.self_url, "http://localhost:8080/boats/4");
        assert_eq!(dto.cargo.len(), 2);
        assert_eq!(dto.cargo[0].id, 9);
        assert_eq!(dto.cargo[0].self_url, "http://localhost:8080/cargo/9");
        assert_eq!(dto.cargo[1].id, 2);
    }
}
