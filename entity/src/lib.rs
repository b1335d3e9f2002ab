//! SeaORM entity models for the boatyard database.
//!
//! Each module mirrors one table created by the `migration` crate. The server
//! converts these models into domain types at the repository boundary.

pub mod prelude;

pub mod boat;
pub mod boat_cargo;
pub mod cargo;
pub mod user;
