use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::oauth::GoogleAuthService;

impl<'a> GoogleAuthService<'a> {
    /// Generates the Google consent screen URL and its anti-replay state.
    ///
    /// Only the `profile` scope is requested; the display name and subject are all
    /// the application needs.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("profile".to_string()))
            .url();

        (authorize_url, csrf_state)
    }
}
