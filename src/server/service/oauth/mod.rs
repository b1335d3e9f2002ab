//! OAuth2 login with Google

use crate::server::{service::identity::IdentityVerifier, state::GoogleOAuthClient};

pub mod callback;
pub mod login;

pub struct GoogleAuthService<'a> {
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a GoogleOAuthClient,
    pub identity_verifier: &'a dyn IdentityVerifier,
}

impl<'a> GoogleAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a GoogleOAuthClient,
        identity_verifier: &'a dyn IdentityVerifier,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            identity_verifier,
        }
    }
}
