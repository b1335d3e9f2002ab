use crate::server::{
    data::boat::BoatRepository,
    model::boat::{CreateBoatParam, UpdateBoatParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_by_owner_paginated;
mod update;
