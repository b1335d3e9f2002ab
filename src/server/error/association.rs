use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the boat and cargo bookkeeping.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssociationError {
    /// Boat or cargo named in the route does not exist.
    #[error("The specified boat and/or cargo does not exist")]
    NotFound,

    /// The cargo already has a carrier.
    #[error("The specified cargo is already assigned a boat")]
    Conflict,

    /// The cargo's carrier is not the boat named in the route.
    #[error("The specified boat is not assigned to this cargo")]
    CarrierMismatch,

    /// The boat's cargo list does not contain the cargo.
    #[error("The specified cargo is not assigned to this boat")]
    NotListed,
}

impl IntoResponse for AssociationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict | Self::CarrierMismatch | Self::NotListed => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
