//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern:
//! - `CsrfSession` - OAuth `state` value between `/authenticate` and `/oauth`
//! - `LoginSession` - Signed-in profile between `/oauth` and `/success`

use tower_sessions::Session;

use crate::server::{error::AppError, model::auth::LoginProfile};

// Session key constants
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_PROFILE: &str = "auth:profile";

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for OAuth flows. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// The token is removed so each one can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// Signed-in profile shown once on the success page.
pub struct LoginSession<'a> {
    session: &'a Session,
}

impl<'a> LoginSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn set_profile(&self, profile: LoginProfile) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_PROFILE, profile).await?;
        Ok(())
    }

    /// # Returns
    /// - `Ok(Some(profile))` - A login completed within the session lifetime
    /// - `Ok(None)` - No completed login in this session
    pub async fn get_profile(&self) -> Result<Option<LoginProfile>, AppError> {
        let profile = self.session.get(SESSION_AUTH_PROFILE).await?;
        Ok(profile)
    }

    /// Clears all data from the session.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
