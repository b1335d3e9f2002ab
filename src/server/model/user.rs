//! User domain models and parameters.
//!
//! Users are recorded the first time they complete a login and are never updated
//! or deleted afterwards.

use crate::{
    model::user::{UserDto, UserListDto},
    server::{model::page::Page, util::url::LinkBuilder},
};

pub const USERS_PATH: &str = "users";

/// User identified by the identity provider's subject identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Subject identifier issued by the identity provider.
    pub user_id: String,
    /// Display name reported by the profile API at first login.
    pub display_name: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            display_name: entity.display_name,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.user_id,
            display_name: self.display_name,
        }
    }
}

impl Page<User> {
    pub fn into_dto(self, links: &LinkBuilder) -> UserListDto {
        UserListDto {
            next: self
                .next_cursor
                .map(|cursor| links.next_page(USERS_PATH, cursor)),
            count: self.count,
            users: self.items.into_iter().map(User::into_dto).collect(),
        }
    }
}

/// Parameters for recording a newly seen user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub user_id: String,
    pub display_name: String,
}
