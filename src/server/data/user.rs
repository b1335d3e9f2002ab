use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    page::{Page, PAGE_SIZE},
    user::{CreateUserParam, User},
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let user = entity::user::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            display_name: ActiveValue::Set(param.display_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(user))
    }

    /// Gets the page of users that follows `cursor`, ordered by insertion
    pub async fn get_paginated(&self, cursor: Option<i32>) -> Result<Page<User>, DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(cursor) = cursor {
            query = query.filter(entity::user::Column::Id.gt(cursor));
        }

        let rows = query
            .order_by_asc(entity::user::Column::Id)
            .limit(PAGE_SIZE + 1)
            .all(self.db)
            .await?;

        let count = entity::prelude::User::find().count(self.db).await?;

        Ok(Page::from_lookahead(rows, count, |user| user.id).map(User::from_entity))
    }
}
