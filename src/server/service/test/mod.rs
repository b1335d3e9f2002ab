use crate::server::{
    error::{association::AssociationError, AppError},
    model::user::CreateUserParam,
    service::{
        association::AssociationService, boat::BoatService, cargo::CargoService,
        user::UserService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod cargo;

/// Unwraps an association error, failing the test for any other outcome.
fn association_err<T: std::fmt::Debug>(result: Result<T, AppError>) -> AssociationError {
    match result {
        Err(AppError::AssociationErr(err)) => err,
        other => panic!("expected association error, got {:?}", other),
    }
}
