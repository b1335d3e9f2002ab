use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        cargo::{CargoDto, CargoListDto, CargoPayloadDto},
    },
    server::{
        controller::{PageParams, MISSING_ATTRIBUTES},
        error::AppError,
        middleware::content::{AcceptsJson, JsonBody, JsonExchange},
        model::cargo::{CreateCargoParam, UpdateCargoParam},
        service::cargo::CargoService,
        state::AppState,
        util::parse::{parse_cursor, parse_id},
    },
};

/// Tag for grouping cargo endpoints in OpenAPI documentation
pub static CARGO_TAG: &str = "cargo";

pub const CARGO_NOT_FOUND: &str = "No cargo with this cargo_id exists";

/// List all cargo, five per page.
///
/// Cargo is public; no bearer token is needed.
#[utoipa::path(
    get,
    path = "/cargo",
    tag = CARGO_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of cargo", body = CargoListDto),
        (status = 400, description = "Malformed cursor", body = ErrorDto),
        (status = 406, description = "Client does not accept JSON")
    )
)]
pub async fn list_cargo(
    State(state): State<AppState>,
    _: AcceptsJson,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let cursor = parse_cursor(params.cursor.as_deref())?;

    let page = CargoService::new(&state.db).list(cursor).await?;

    Ok((StatusCode::OK, Json(page.into_dto(&state.links))))
}

/// Create cargo that no boat carries yet.
///
/// # Returns
/// - `201 Created` - The new cargo with a null carrier
/// - `400 Bad Request` - Missing attribute or malformed body
/// - `406 Not Acceptable` - Client does not accept JSON
/// - `415 Unsupported Media Type` - Body is not JSON
#[utoipa::path(
    post,
    path = "/cargo",
    tag = CARGO_TAG,
    request_body = CargoPayloadDto,
    responses(
        (status = 201, description = "Cargo created", body = CargoDto),
        (status = 400, description = "Missing or invalid attributes", body = ErrorDto),
        (status = 406, description = "Client does not accept JSON"),
        (status = 415, description = "Body is not JSON", body = ErrorDto)
    )
)]
pub async fn create_cargo(
    State(state): State<AppState>,
    _: JsonExchange,
    body: JsonBody<CargoPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = body.parse()?;

    let (Some(volume), Some(content), Some(creation_date)) =
        (payload.volume, payload.content, payload.creation_date)
    else {
        return Err(AppError::BadRequest(MISSING_ATTRIBUTES.to_string()));
    };

    let cargo = CargoService::new(&state.db)
        .create(CreateCargoParam {
            volume,
            content,
            creation_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(cargo.into_dto(&state.links))))
}

#[utoipa::path(
    get,
    path = "/cargo/{cargo_id}",
    tag = CARGO_TAG,
    params(("cargo_id" = String, Path, description = "Cargo ID")),
    responses(
        (status = 200, description = "The cargo", body = CargoDto),
        (status = 404, description = "No such cargo", body = ErrorDto),
        (status = 406, description = "Client does not accept JSON")
    )
)]
pub async fn get_cargo(
    State(state): State<AppState>,
    _: AcceptsJson,
    Path(cargo_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&cargo_id).ok_or_else(not_found)?;

    let cargo = CargoService::new(&state.db)
        .get(id)
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(cargo.into_dto(&state.links))))
}

/// Update some attributes of cargo. The carrier only changes through the boat routes.
#[utoipa::path(
    patch,
    path = "/cargo/{cargo_id}",
    tag = CARGO_TAG,
    params(("cargo_id" = String, Path, description = "Cargo ID")),
    request_body = CargoPayloadDto,
    responses(
        (status = 200, description = "The updated cargo", body = CargoDto),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 404, description = "No such cargo", body = ErrorDto)
    )
)]
pub async fn update_cargo(
    State(state): State<AppState>,
    _: JsonExchange,
    Path(cargo_id): Path<String>,
    body: JsonBody<CargoPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = body.parse()?;

    let id = parse_id(&cargo_id).ok_or_else(not_found)?;

    let cargo = CargoService::new(&state.db)
        .update(
            id,
            UpdateCargoParam {
                volume: payload.volume,
                content: payload.content,
                creation_date: payload.creation_date,
            },
        )
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(cargo.into_dto(&state.links))))
}

/// Replace every attribute of cargo.
#[utoipa::path(
    put,
    path = "/cargo/{cargo_id}",
    tag = CARGO_TAG,
    params(("cargo_id" = String, Path, description = "Cargo ID")),
    request_body = CargoPayloadDto,
    responses(
        (status = 200, description = "The updated cargo", body = CargoDto),
        (status = 400, description = "Missing or invalid attributes", body = ErrorDto),
        (status = 404, description = "No such cargo", body = ErrorDto)
    )
)]
pub async fn replace_cargo(
    State(state): State<AppState>,
    _: JsonExchange,
    Path(cargo_id): Path<String>,
    body: JsonBody<CargoPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let payload = body.parse()?;

    let (Some(volume), Some(content), Some(creation_date)) =
        (payload.volume, payload.content, payload.creation_date)
    else {
        return Err(AppError::BadRequest(MISSING_ATTRIBUTES.to_string()));
    };

    let id = parse_id(&cargo_id).ok_or_else(not_found)?;

    let cargo = CargoService::new(&state.db)
        .update(
            id,
            UpdateCargoParam {
                volume: Some(volume),
                content: Some(content),
                creation_date: Some(creation_date),
            },
        )
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(cargo.into_dto(&state.links))))
}

/// Delete cargo, unloading it from its carrier first.
#[utoipa::path(
    delete,
    path = "/cargo/{cargo_id}",
    tag = CARGO_TAG,
    params(("cargo_id" = String, Path, description = "Cargo ID")),
    responses(
        (status = 204, description = "Cargo deleted"),
        (status = 404, description = "No such cargo", body = ErrorDto)
    )
)]
pub async fn delete_cargo(
    State(state): State<AppState>,
    Path(cargo_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&cargo_id).ok_or_else(not_found)?;

    if !CargoService::new(&state.db).delete(id).await? {
        return Err(not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}

fn not_found() -> AppError {
    AppError::NotFound(CARGO_NOT_FOUND.to_string())
}
