//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON wire format. Server-side domain models in
//! `server::model` convert into them at the controller boundary.

pub mod api;
pub mod boat;
pub mod cargo;
pub mod user;
