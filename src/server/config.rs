use url::Url;

use crate::server::error::{config::ConfigError, AppError};

pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";
pub const GOOGLE_PEOPLE_URL: &str = "https://people.googleapis.com/v1/people/me";

const DEFAULT_PORT: u16 = 8080;

/// Immutable application configuration, read once at startup.
pub struct Config {
    pub database_url: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    /// Redirect URI registered with Google; differs between development and production.
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,
    pub google_tokeninfo_url: String,

    /// Public base URL used to build `self` and `next` links.
    pub app_url: Url,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let development = std::env::var("APP_ENV")
            .map(|env| env == "development")
            .unwrap_or(false);

        let google_redirect_url = match std::env::var("GOOGLE_REDIRECT_URL_DEV") {
            Ok(url) if development => url,
            _ => required("GOOGLE_REDIRECT_URL")?,
        };

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        let app_url_raw = required("APP_URL")?;
        let app_url = Url::parse(&app_url_raw).map_err(ConfigError::from)?;
        if app_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidEnvVar {
                name: "APP_URL".to_string(),
                value: app_url_raw,
            }
            .into());
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            google_client_id: required("GOOGLE_CLIENT_ID")?,
            google_client_secret: required("GOOGLE_CLIENT_SECRET")?,
            google_redirect_url,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            google_tokeninfo_url: GOOGLE_TOKENINFO_URL.to_string(),
            app_url,
            port,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
