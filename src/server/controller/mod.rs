//! HTTP request handlers.
//!
//! Controllers check media types, authentication and ownership, convert DTOs into
//! service parameters and domain models back into DTOs with absolute links.

pub mod auth;
pub mod boat;
pub mod cargo;
pub mod user;

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters shared by every paginated collection.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Opaque cursor taken from the previous page's `next` link.
    pub cursor: Option<String>,
}

/// Error message for a body lacking a required attribute.
pub const MISSING_ATTRIBUTES: &str =
    "The request object is missing at least one of the required attributes";

#[cfg(test)]
mod test;
