pub use super::boat::Entity as Boat;
pub use super::boat_cargo::Entity as BoatCargo;
pub use super::cargo::Entity as Cargo;
pub use super::user::Entity as User;
