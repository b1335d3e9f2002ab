use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No usable bearer identity accompanied a request that requires one.
    ///
    /// Raised when the `Authorization` header is missing, malformed, or carries a
    /// token that failed verification. Results in a 401 Unauthorized response.
    #[error("Invalid or missing JWT")]
    BadCredential,

    /// The identity provider or a local claim check rejected the token.
    ///
    /// # Fields
    /// - Reason the token was rejected, logged but never returned to the client
    #[error("Identity token rejected: {0}")]
    InvalidToken(String),

    /// The identity provider could not be reached while verifying a token.
    #[error("Identity provider request failed: {0}")]
    ProviderUnavailable(#[from] reqwest::Error),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// CSRF state is missing from the session during OAuth callback.
    ///
    /// Usually means the session expired between `/authenticate` and `/oauth`.
    #[error("Failed to login user due to missing CSRF state in session")]
    CsrfMissingValue,

    /// The token endpoint answered without an ID token.
    #[error("Token response did not include an id_token")]
    MissingIdToken,

    /// OAuth code exchange with the token endpoint failed.
    #[error("Failed to exchange authorization code: {0}")]
    CodeExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every credential failure is reported with the same 401 body so clients cannot
/// probe why a token was rejected. The underlying reason is logged at debug level.
/// Login flow failures map to 400 Bad Request.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::BadCredential | Self::InvalidToken(_) | Self::ProviderUnavailable(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: Self::BadCredential.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CsrfValidationFailed
            | Self::CsrfMissingValue
            | Self::MissingIdToken
            | Self::CodeExchange(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "There was an issue logging you in, please try again.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
