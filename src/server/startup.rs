use oauth2::{AuthUrl, Client, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    service::identity::{GoogleIdentityVerifier, IdentityVerifier},
    state::GoogleOAuthClient,
};

/// Minutes of inactivity after which the login session expires.
const SESSION_INACTIVITY_MINUTES: i64 = 5;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application's Sqlite database.
///
/// Sessions hold the OAuth state between `/authenticate` and `/oauth` and the signed-in
/// profile until `/success` shows it. They expire after five minutes of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SessionErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            SESSION_INACTIVITY_MINUTES,
        )));

    Ok(session_layer)
}

/// Builds the HTTP client used for every outbound request.
///
/// Redirects are disabled so the OAuth token exchange cannot be redirected elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the Google OAuth2 client from configuration.
pub fn setup_oauth_client(config: &Config) -> Result<GoogleOAuthClient, AppError> {
    let client = build_oauth_client(
        &config.google_client_id,
        &config.google_client_secret,
        &config.google_auth_url,
        &config.google_token_url,
        &config.google_redirect_url,
    )?;

    Ok(client)
}

/// Builds an OAuth2 client for the given endpoints and credentials.
///
/// # Returns
/// - `Ok(GoogleOAuthClient)` - Client with authorization and token endpoints set
/// - `Err(ConfigError::InvalidUrl)` - One of the URLs failed to parse
pub fn build_oauth_client(
    client_id: &str,
    client_secret: &str,
    auth_url: &str,
    token_url: &str,
    redirect_url: &str,
) -> Result<GoogleOAuthClient, ConfigError> {
    let client: GoogleOAuthClient = Client::new(ClientId::new(client_id.to_string()))
        .set_client_secret(ClientSecret::new(client_secret.to_string()))
        .set_auth_uri(AuthUrl::new(auth_url.to_string())?)
        .set_token_uri(TokenUrl::new(token_url.to_string())?)
        .set_redirect_uri(RedirectUrl::new(redirect_url.to_string())?);

    Ok(client)
}

/// Creates the verifier for bearer identity tokens.
pub fn setup_identity_verifier(
    config: &Config,
    http_client: reqwest::Client,
) -> Arc<dyn IdentityVerifier> {
    Arc::new(GoogleIdentityVerifier::new(
        http_client,
        config.google_tokeninfo_url.clone(),
        config.google_client_id.clone(),
    ))
}
