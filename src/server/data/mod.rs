//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the same code runs against the
//! connection pool or inside a transaction opened by the service layer.

pub mod boat;
pub mod boat_cargo;
pub mod cargo;
pub mod user;

#[cfg(test)]
mod test;
