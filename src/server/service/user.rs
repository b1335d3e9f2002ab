//! User service for business logic.
//!
//! Users are recorded when they reach the login success page and are listed
//! publicly, five per page.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        page::Page,
        user::{CreateUserParam, User},
    },
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, cursor: Option<i32>) -> Result<Page<User>, AppError> {
        let page = UserRepository::new(self.db).get_paginated(cursor).await?;

        Ok(page)
    }

    /// Records a user unless they already appear on the first page of users.
    ///
    /// Only the first page is scanned, so a user beyond it is recorded again.
    ///
    /// # Returns
    /// - `Ok(true)` - A new user record was inserted
    /// - `Ok(false)` - The user was found on the first page
    pub async fn add_user(&self, param: CreateUserParam) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        let first_page = user_repo.get_paginated(None).await?;
        if first_page
            .items
            .iter()
            .any(|user| user.user_id == param.user_id)
        {
            return Ok(false);
        }

        let user = user_repo.create(param).await?;
        tracing::info!("Recorded new user {}", user.user_id);

        Ok(true)
    }
}
