use crate::server::{
    data::cargo::CargoRepository,
    model::cargo::{CreateCargoParam, UpdateCargoParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod carrier;
mod crud;
mod get_paginated;
