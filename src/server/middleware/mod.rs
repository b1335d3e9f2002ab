//! Request extractors and session wrappers.
//!
//! - `auth` - Resolves the bearer identity of the caller
//! - `content` - Media type gate and JSON body parsing
//! - `session` - Typed access to login flow state kept in the session

pub mod auth;
pub mod content;
pub mod session;

#[cfg(test)]
mod test;
