use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, user::UserListDto},
    server::{
        controller::PageParams, error::AppError, service::user::UserService, state::AppState,
        util::parse::parse_cursor,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every user that has logged in, five per page.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of users", body = UserListDto),
        (status = 400, description = "Malformed cursor", body = ErrorDto),
        (status = 405, description = "Only GET is allowed on the users collection")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let cursor = parse_cursor(params.cursor.as_deref())?;

    let page = UserService::new(&state.db).list(cursor).await?;

    Ok((StatusCode::OK, Json(page.into_dto(&state.links))))
}

/// Users are read-only and have no per-user resource.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")])
}
