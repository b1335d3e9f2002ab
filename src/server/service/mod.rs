//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Keeping both sides of a boat and cargo link consistent

pub mod association;
pub mod boat;
pub mod cargo;
pub mod identity;
pub mod oauth;
pub mod user;

#[cfg(test)]
mod test;
