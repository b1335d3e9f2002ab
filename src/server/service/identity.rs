//! Bearer identity token verification.
//!
//! Clients authenticate with the Google ID token shown to them after login. The
//! token is checked by Google's token-info endpoint, which validates the signature,
//! and the returned claims are then checked locally against this client.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::server::error::auth::AuthError;

const ACCEPTED_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// Resolves a bearer token to the subject identifier of its user.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// # Returns
    /// - `Ok(String)` - Subject identifier of the token's user
    /// - `Err(AuthError)` - Token rejected or provider unreachable
    async fn verify(&self, token: &str) -> Result<String, AuthError>;
}

/// Claims returned by the token-info endpoint. Every value is a string.
#[derive(Debug, Deserialize)]
pub struct TokenInfo {
    pub aud: String,
    pub iss: String,
    pub exp: String,
    pub sub: String,
}

impl TokenInfo {
    /// Checks the claims and returns the subject.
    ///
    /// # Arguments
    /// - `client_id` - Expected audience
    /// - `now` - Current time, compared against `exp`
    pub fn into_subject(self, client_id: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        if self.aud != client_id {
            return Err(AuthError::InvalidToken("audience mismatch".to_string()));
        }

        if !ACCEPTED_ISSUERS.contains(&self.iss.as_str()) {
            return Err(AuthError::InvalidToken(format!(
                "unexpected issuer {}",
                self.iss
            )));
        }

        let exp = self
            .exp
            .parse::<i64>()
            .map_err(|_| AuthError::InvalidToken(format!("malformed exp {}", self.exp)))?;
        if exp <= now.timestamp() {
            return Err(AuthError::InvalidToken("token expired".to_string()));
        }

        if self.sub.is_empty() {
            return Err(AuthError::InvalidToken("empty subject".to_string()));
        }

        Ok(self.sub)
    }
}

/// Verifies Google ID tokens through the token-info endpoint.
pub struct GoogleIdentityVerifier {
    http_client: reqwest::Client,
    tokeninfo_url: String,
    client_id: String,
}

impl GoogleIdentityVerifier {
    pub fn new(http_client: reqwest::Client, tokeninfo_url: String, client_id: String) -> Self {
        Self {
            http_client,
            tokeninfo_url,
            client_id,
        }
    }
}

#[async_trait]
impl IdentityVerifier for GoogleIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<String, AuthError> {
        let response = self
            .http_client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", token)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuthError::InvalidToken(format!(
                "token info returned {}",
                response.status()
            )));
        }

        let info = response.json::<TokenInfo>().await?;

        info.into_subject(&self.client_id, Utc::now())
    }
}

/// Verifier with a fixed token to subject table.
#[cfg(test)]
pub struct StaticIdentityVerifier {
    tokens: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl StaticIdentityVerifier {
    pub fn new(tokens: &[(&str, &str)]) -> Self {
        Self {
            tokens: tokens
                .iter()
                .map(|(token, subject)| (token.to_string(), subject.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl IdentityVerifier for StaticIdentityVerifier {
    async fn verify(&self, token: &str) -> Result<String, AuthError> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| AuthError::InvalidToken("unknown token".to_string()))
    }
}
