use oauth2::{AuthorizationCode, TokenResponse};
use serde::Deserialize;

use crate::server::{
    config::GOOGLE_PEOPLE_URL,
    error::{auth::AuthError, AppError},
    model::auth::LoginProfile,
    service::oauth::GoogleAuthService,
};

#[derive(Debug, Deserialize)]
struct PersonName {
    #[serde(rename = "displayName")]
    display_name: String,
}

/// Subset of the People API `people/me` response.
#[derive(Debug, Deserialize)]
struct Person {
    #[serde(default)]
    names: Vec<PersonName>,
}

impl<'a> GoogleAuthService<'a> {
    /// Completes a login from the authorization code Google redirected back with.
    ///
    /// Exchanges the code for tokens, reads the display name from the People API and
    /// verifies the ID token to learn the user's subject identifier.
    ///
    /// # Returns
    /// - `Ok(LoginProfile)` - Display name, subject and the ID token to use as bearer token
    /// - `Err(AuthError::CodeExchange)` - Token endpoint rejected the code
    /// - `Err(AuthError::MissingIdToken)` - Token response carried no ID token
    /// - `Err(AppError::ReqwestErr)` - People API request failed
    pub async fn callback(&self, authorization_code: String) -> Result<LoginProfile, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::CodeExchange(e.to_string()))?;

        let id_token = token
            .extra_fields()
            .id_token
            .clone()
            .ok_or(AuthError::MissingIdToken)?;

        let display_name = self
            .fetch_display_name(token.access_token().secret())
            .await?;

        let user_id = self.identity_verifier.verify(&id_token).await?;

        Ok(LoginProfile {
            display_name,
            user_id,
            token: id_token,
        })
    }

    async fn fetch_display_name(&self, access_token: &str) -> Result<String, AppError> {
        let person = self
            .http_client
            .get(GOOGLE_PEOPLE_URL)
            .query(&[("personFields", "names")])
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<Person>()
            .await?;

        person
            .names
            .into_iter()
            .next()
            .map(|name| name.display_name)
            .ok_or_else(|| AppError::InternalError("Profile has no display name".to_string()))
    }
}
