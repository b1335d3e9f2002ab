//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for external API requests
//! - OAuth2 client for Google sign-in
//! - Identity verifier for bearer tokens
//! - Link builder for absolute resource URLs

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, ExtraTokenFields,
    RevocationErrorResponseType, StandardErrorResponse, StandardRevocableToken,
    StandardTokenIntrospectionResponse, StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use crate::server::{service::identity::IdentityVerifier, util::url::LinkBuilder};

/// Extra fields of Google's token response.
///
/// Google returns an OpenID Connect ID token next to the access token when the
/// authorization request includes a Google profile scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleTokenFields {
    pub id_token: Option<String>,
}

impl ExtraTokenFields for GoogleTokenFields {}

pub(crate) type GoogleTokenResponse = StandardTokenResponse<GoogleTokenFields, BasicTokenType>;

/// Type alias for the OAuth2 client configured for Google sign-in.
pub(crate) type GoogleOAuthClient = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    GoogleTokenResponse,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `GoogleOAuthClient` is designed to be cloned
/// - `Arc<dyn IdentityVerifier>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured without redirects. Used for the token exchange, the People API
    /// and token verification.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google sign-in flow.
    pub oauth_client: GoogleOAuthClient,

    /// Resolves bearer tokens to subject identifiers.
    pub identity_verifier: Arc<dyn IdentityVerifier>,

    /// Builds absolute `self` and `next` links from the public base URL.
    pub links: LinkBuilder,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Google sign-in
    /// - `identity_verifier` - Bearer token verifier
    /// - `app_url` - Public base URL of the application
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: GoogleOAuthClient,
        identity_verifier: Arc<dyn IdentityVerifier>,
        app_url: Url,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            identity_verifier,
            links: LinkBuilder::new(app_url),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State backed by `db` whose verifier accepts exactly the given `(token, subject)` pairs.
    pub fn for_test(db: DatabaseConnection, tokens: &[(&str, &str)]) -> Self {
        use crate::server::{
            config::{GOOGLE_AUTH_URL, GOOGLE_TOKEN_URL},
            service::identity::StaticIdentityVerifier,
            startup::build_oauth_client,
        };

        let oauth_client = build_oauth_client(
            "client-id",
            "client-secret",
            GOOGLE_AUTH_URL,
            GOOGLE_TOKEN_URL,
            "http://localhost:8080/oauth",
        )
        .unwrap();

        Self::new(
            db,
            reqwest::Client::new(),
            oauth_client,
            Arc::new(StaticIdentityVerifier::new(tokens)),
            Url::parse("http://localhost:8080").unwrap(),
        )
    }
}
