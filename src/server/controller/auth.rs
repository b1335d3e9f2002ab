use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::{CsrfSession, LoginSession},
    model::{auth::LoginProfile, user::CreateUserParam},
    service::{oauth::GoogleAuthService, user::UserService},
    state::AppState,
};

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Boatyard</title></head>
  <body>
    <h1>Boatyard</h1>
    <p>Sign in with Google to receive a bearer token for the boats API.</p>
    <a href="/authenticate">Sign in with Google</a>
  </body>
</html>
"#;

const ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Boatyard</title></head>
  <body>
    <h1>There was an issue logging you in, please try again.</h1>
    <a href="/">Back to start</a>
  </body>
</html>
"#;

/// Query parameters Google appends to the redirect URI.
///
/// Both are optional: a visitor can open `/oauth` directly, and Google sends
/// `error` instead of `code` when consent is denied.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// Redirects to Google's consent screen, remembering the OAuth state in the session.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = GoogleAuthService::new(
        &state.http_client,
        &state.oauth_client,
        state.identity_verifier.as_ref(),
    );

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the login Google redirected back with.
///
/// Failures are logged and send the visitor to the error page instead of
/// answering with JSON, since this route is only ever opened by a browser.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Redirect {
    let Some(code) = params.code else {
        return Redirect::temporary("/");
    };

    match complete_login(&state, &session, code, params.state).await {
        Ok(()) => Redirect::temporary("/success"),
        Err(err) => {
            tracing::warn!("Login failed: {}", err);
            Redirect::temporary("/error")
        }
    }
}

/// Shows the signed-in profile and records the user on first login.
pub async fn success(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let Some(profile) = LoginSession::new(&session).get_profile().await? else {
        return Ok(Redirect::temporary("/").into_response());
    };

    UserService::new(&state.db)
        .add_user(CreateUserParam {
            user_id: profile.user_id.clone(),
            display_name: profile.display_name.clone(),
        })
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())).into_response())
}

/// Forgets any partial login and asks the visitor to try again.
pub async fn error_page(session: Session) -> Html<&'static str> {
    LoginSession::new(&session).clear().await;

    Html(ERROR_PAGE)
}

async fn complete_login(
    state: &AppState,
    session: &Session,
    code: String,
    csrf_state: Option<String>,
) -> Result<(), AppError> {
    validate_csrf(session, csrf_state.as_deref()).await?;

    let auth_service = GoogleAuthService::new(
        &state.http_client,
        &state.oauth_client,
        state.identity_verifier.as_ref(),
    );

    let profile: LoginProfile = auth_service.callback(code).await?;

    LoginSession::new(session).set_profile(profile).await
}

async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    match (stored_state, csrf_state) {
        (Some(stored), Some(received)) if stored == received => Ok(()),
        (None, _) | (_, None) => Err(AuthError::CsrfMissingValue.into()),
        _ => Err(AuthError::CsrfValidationFailed.into()),
    }
}
