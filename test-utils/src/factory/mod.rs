//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let boat = factory::boat::create_boat(&db).await?;
//!     let cargo = factory::cargo::create_cargo(&db).await?;
//!
//!     // Put the cargo on the boat, updating both sides of the link
//!     factory::helpers::load_cargo(&db, &boat, &cargo).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let boat = factory::boat::BoatFactory::new(&db)
//!     .name("Sea Witch")
//!     .owner("subject-a")
//!     .build()
//!     .await?;
//! ```

pub mod boat;
pub mod cargo;
pub mod helpers;
pub mod user;

pub use boat::{create_boat, create_boat_for_owner};
pub use cargo::create_cargo;
pub use user::create_user;
