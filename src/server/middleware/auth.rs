use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Bearer identity of the caller.
///
/// Holds the subject identifier when the request carried `Authorization: Bearer <token>`
/// with a token the identity verifier accepted, and `None` otherwise. Extraction never
/// fails so handlers decide where in their checks authentication happens.
#[derive(Debug, Clone, PartialEq)]
pub struct Caller(pub Option<String>);

impl Caller {
    /// Returns the caller's subject identifier.
    ///
    /// # Returns
    /// - `Ok(&str)` - Caller presented a valid bearer token
    /// - `Err(AuthError::BadCredential)` - Token missing, malformed or rejected
    pub fn require(&self) -> Result<&str, AppError> {
        self.0
            .as_deref()
            .ok_or_else(|| AuthError::BadCredential.into())
    }
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(Caller(None));
        };

        match state.identity_verifier.verify(token).await {
            Ok(subject) => Ok(Caller(Some(subject))),
            Err(err) => {
                tracing::debug!("Bearer token rejected: {}", err);
                Ok(Caller(None))
            }
        }
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
