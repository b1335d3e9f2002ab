mod boat;
mod cargo;
mod user;
