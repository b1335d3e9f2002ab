use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        boat::{BoatDto, BoatListDto, BoatPayloadDto},
    },
    server::{
        controller::{PageParams, MISSING_ATTRIBUTES},
        error::{association::AssociationError, AppError},
        middleware::{
            auth::Caller,
            content::{AcceptsJson, JsonBody, JsonExchange, INVALID_ATTRIBUTES},
        },
        model::boat::{is_valid_boat_name, Boat, CreateBoatParam, UpdateBoatParam},
        service::{association::AssociationService, boat::BoatService},
        state::AppState,
        util::parse::{parse_cursor, parse_id},
    },
};

/// Tag for grouping boat endpoints in OpenAPI documentation
pub static BOAT_TAG: &str = "boat";

pub const BOAT_NOT_FOUND: &str = "No boat with this boat_id exists or you do not have access to it";
pub const BOAT_FORBIDDEN: &str = "You do not have access to modify or view this boat";
pub const BOAT_ID_IMMUTABLE: &str = "Boat ID modification is not allowed.";
pub const MALFORMED_IDENTIFIER: &str = "Identifier malformed.";

/// List the caller's boats.
///
/// Returns five boats per page with links to each boat and its cargo. `count` is
/// the number of boats the caller owns across all pages.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `200 OK` - Page of the caller's boats
/// - `400 Bad Request` - Malformed cursor
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `406 Not Acceptable` - Client does not accept JSON
#[utoipa::path(
    get,
    path = "/boats",
    tag = BOAT_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of the caller's boats", body = BoatListDto),
        (status = 400, description = "Malformed cursor", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 406, description = "Client does not accept JSON")
    ),
    security(("bearer" = []))
)]
pub async fn list_boats(
    State(state): State<AppState>,
    _: AcceptsJson,
    caller: Caller,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let owner = caller.require()?;
    let cursor = parse_cursor(params.cursor.as_deref())?;

    let page = BoatService::new(&state.db)
        .list_by_owner(owner, cursor)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(&state.links))))
}

/// Create a boat owned by the caller.
///
/// # Access Control
/// - Bearer token required
///
/// # Returns
/// - `201 Created` - The new boat with an empty cargo list
/// - `400 Bad Request` - Missing attribute, invalid name or unknown attribute
/// - `401 Unauthorized` - Missing or invalid bearer token
#[utoipa::path(
    post,
    path = "/boats",
    tag = BOAT_TAG,
    request_body = BoatPayloadDto,
    responses(
        (status = 201, description = "Boat created", body = BoatDto),
        (status = 400, description = "Missing or invalid attributes", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 406, description = "Client does not accept JSON"),
        (status = 415, description = "Body is not JSON", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_boat(
    State(state): State<AppState>,
    _: JsonExchange,
    caller: Caller,
    body: JsonBody<BoatPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = caller.require()?;
    let payload = body.parse()?;

    if payload.id.is_some() {
        return Err(AppError::BadRequest(INVALID_ATTRIBUTES.to_string()));
    }

    let (Some(name), Some(kind), Some(length)) = (payload.name, payload.kind, payload.length)
    else {
        return Err(AppError::BadRequest(MISSING_ATTRIBUTES.to_string()));
    };

    if !is_valid_boat_name(&name) {
        return Err(AppError::BadRequest(INVALID_ATTRIBUTES.to_string()));
    }

    let boat = BoatService::new(&state.db)
        .create(CreateBoatParam {
            name,
            kind,
            length,
            owner: owner.to_string(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(boat.into_dto(&state.links))))
}

/// Get one of the caller's boats.
///
/// # Returns
/// - `200 OK` - The boat
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Boat belongs to another user
/// - `404 Not Found` - No such boat
#[utoipa::path(
    get,
    path = "/boats/{boat_id}",
    tag = BOAT_TAG,
    params(("boat_id" = String, Path, description = "Boat ID")),
    responses(
        (status = 200, description = "The boat", body = BoatDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Boat belongs to another user", body = ErrorDto),
        (status = 404, description = "No such boat", body = ErrorDto),
        (status = 406, description = "Client does not accept JSON")
    ),
    security(("bearer" = []))
)]
pub async fn get_boat(
    State(state): State<AppState>,
    _: AcceptsJson,
    caller: Caller,
    Path(boat_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let owner = caller.require()?;

    let boat = find_boat(&state, &boat_id).await?;
    ensure_owner(&boat, owner)?;

    Ok((StatusCode::OK, Json(boat.into_dto(&state.links))))
}

/// Update some attributes of one of the caller's boats.
///
/// # Returns
/// - `200 OK` - The updated boat
/// - `400 Bad Request` - Body contains `id` or an invalid attribute
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Boat belongs to another user
/// - `404 Not Found` - No such boat
#[utoipa::path(
    patch,
    path = "/boats/{boat_id}",
    tag = BOAT_TAG,
    params(("boat_id" = String, Path, description = "Boat ID")),
    request_body = BoatPayloadDto,
    responses(
        (status = 200, description = "The updated boat", body = BoatDto),
        (status = 400, description = "Invalid attributes or id in body", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Boat belongs to another user", body = ErrorDto),
        (status = 404, description = "No such boat", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_boat(
    State(state): State<AppState>,
    _: JsonExchange,
    caller: Caller,
    Path(boat_id): Path<String>,
    body: JsonBody<BoatPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = caller.require()?;
    let payload = body.parse()?;

    let boat = find_boat(&state, &boat_id).await?;

    if payload.id.is_some() {
        return Err(AppError::BadRequest(BOAT_ID_IMMUTABLE.to_string()));
    }

    ensure_owner(&boat, owner)?;

    if payload
        .name
        .as_deref()
        .is_some_and(|name| !is_valid_boat_name(name))
    {
        return Err(AppError::BadRequest(INVALID_ATTRIBUTES.to_string()));
    }

    let updated = BoatService::new(&state.db)
        .update(
            boat.id,
            UpdateBoatParam {
                name: payload.name,
                kind: payload.kind,
                length: payload.length,
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound(BOAT_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(updated.into_dto(&state.links))))
}

/// Replace every attribute of one of the caller's boats.
///
/// # Returns
/// - `200 OK` - The updated boat
/// - `400 Bad Request` - Missing attribute, body contains `id` or invalid name
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Boat belongs to another user
/// - `404 Not Found` - No such boat
#[utoipa::path(
    put,
    path = "/boats/{boat_id}",
    tag = BOAT_TAG,
    params(("boat_id" = String, Path, description = "Boat ID")),
    request_body = BoatPayloadDto,
    responses(
        (status = 200, description = "The updated boat", body = BoatDto),
        (status = 400, description = "Missing or invalid attributes", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Boat belongs to another user", body = ErrorDto),
        (status = 404, description = "No such boat", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn replace_boat(
    State(state): State<AppState>,
    _: JsonExchange,
    caller: Caller,
    Path(boat_id): Path<String>,
    body: JsonBody<BoatPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let owner = caller.require()?;
    let payload = body.parse()?;

    let (Some(name), Some(kind), Some(length)) = (payload.name, payload.kind, payload.length)
    else {
        return Err(AppError::BadRequest(MISSING_ATTRIBUTES.to_string()));
    };

    let boat = find_boat(&state, &boat_id).await?;

    if payload.id.is_some() {
        return Err(AppError::BadRequest(BOAT_ID_IMMUTABLE.to_string()));
    }

    ensure_owner(&boat, owner)?;

    if !is_valid_boat_name(&name) {
        return Err(AppError::BadRequest(INVALID_ATTRIBUTES.to_string()));
    }

    let updated = BoatService::new(&state.db)
        .update(
            boat.id,
            UpdateBoatParam {
                name: Some(name),
                kind: Some(kind),
                length: Some(length),
            },
        )
        .await?
        .ok_or_else(|| AppError::NotFound(BOAT_NOT_FOUND.to_string()))?;

    Ok((StatusCode::OK, Json(updated.into_dto(&state.links))))
}

/// Load cargo onto one of the caller's boats.
///
/// # Returns
/// - `201 Created` - The boat with the cargo appended
/// - `400 Bad Request` - Malformed boat or cargo ID
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Boat belongs to another user, or cargo already has a carrier
/// - `404 Not Found` - No such boat or cargo
#[utoipa::path(
    patch,
    path = "/boats/{boat_id}/cargo/{cargo_id}",
    tag = BOAT_TAG,
    params(
        ("boat_id" = String, Path, description = "Boat ID"),
        ("cargo_id" = String, Path, description = "Cargo ID")
    ),
    responses(
        (status = 201, description = "Cargo loaded", body = BoatDto),
        (status = 400, description = "Malformed identifier", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Not the owner, or cargo already carried", body = ErrorDto),
        (status = 404, description = "No such boat or cargo", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn load_cargo(
    State(state): State<AppState>,
    caller: Caller,
    Path((boat_id, cargo_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (boat_id, cargo_id) = parse_association_ids(&boat_id, &cargo_id)?;
    let owner = caller.require()?;

    let boat = find_association_boat(&state, boat_id).await?;
    ensure_owner(&boat, owner)?;

    let loaded = AssociationService::new(&state.db)
        .attach(&boat, cargo_id)
        .await?;

    Ok((StatusCode::CREATED, Json(loaded.into_dto(&state.links))))
}

/// Unload cargo from one of the caller's boats.
///
/// Responds `201 Created` on success like the load route.
///
/// # Returns
/// - `201 Created` - The boat with the cargo removed
/// - `400 Bad Request` - Malformed boat or cargo ID
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Boat belongs to another user, or does not carry the cargo
/// - `404 Not Found` - No such boat or cargo
#[utoipa::path(
    delete,
    path = "/boats/{boat_id}/cargo/{cargo_id}",
    tag = BOAT_TAG,
    params(
        ("boat_id" = String, Path, description = "Boat ID"),
        ("cargo_id" = String, Path, description = "Cargo ID")
    ),
    responses(
        (status = 201, description = "Cargo unloaded", body = BoatDto),
        (status = 400, description = "Malformed identifier", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Not the owner, or cargo not on this boat", body = ErrorDto),
        (status = 404, description = "No such boat or cargo", body = ErrorDto),
        (status = 406, description = "Client does not accept JSON")
    ),
    security(("bearer" = []))
)]
pub async fn unload_cargo(
    State(state): State<AppState>,
    _: AcceptsJson,
    caller: Caller,
    Path((boat_id, cargo_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (boat_id, cargo_id) = parse_association_ids(&boat_id, &cargo_id)?;
    let owner = caller.require()?;

    let boat = find_association_boat(&state, boat_id).await?;
    ensure_owner(&boat, owner)?;

    let unloaded = AssociationService::new(&state.db)
        .detach(&boat, cargo_id)
        .await?;

    Ok((StatusCode::CREATED, Json(unloaded.into_dto(&state.links))))
}

/// Delete one of the caller's boats.
///
/// Every cargo the boat carried is left without a carrier.
///
/// # Returns
/// - `204 No Content` - Boat deleted
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - No such boat, or it belongs to another user
#[utoipa::path(
    delete,
    path = "/boats/{boat_id}",
    tag = BOAT_TAG,
    params(("boat_id" = String, Path, description = "Boat ID")),
    responses(
        (status = 204, description = "Boat deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "No such boat or not the owner", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_boat(
    State(state): State<AppState>,
    caller: Caller,
    Path(boat_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let owner = caller.require()?;

    let boat = find_boat(&state, &boat_id).await?;
    if !boat.is_owned_by(owner) {
        return Err(AppError::NotFound(BOAT_NOT_FOUND.to_string()));
    }

    if !BoatService::new(&state.db).delete(boat.id).await? {
        return Err(AppError::NotFound(BOAT_NOT_FOUND.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Looks up the boat named by a route segment; unparsable IDs cannot exist.
async fn find_boat(state: &AppState, boat_id: &str) -> Result<Boat, AppError> {
    let not_found = || AppError::NotFound(BOAT_NOT_FOUND.to_string());

    let id = parse_id(boat_id).ok_or_else(not_found)?;

    BoatService::new(&state.db)
        .get(id)
        .await?
        .ok_or_else(not_found)
}

async fn find_association_boat(state: &AppState, boat_id: i32) -> Result<Boat, AppError> {
    let boat = BoatService::new(&state.db)
        .get(boat_id)
        .await?
        .ok_or(AssociationError::NotFound)?;

    Ok(boat)
}

fn ensure_owner(boat: &Boat, owner: &str) -> Result<(), AppError> {
    if boat.is_owned_by(owner) {
        Ok(())
    } else {
        Err(AppError::Forbidden(BOAT_FORBIDDEN.to_string()))
    }
}

fn parse_association_ids(boat_id: &str, cargo_id: &str) -> Result<(i32, i32), AppError> {
    match (parse_id(boat_id), parse_id(cargo_id)) {
        (Some(boat_id), Some(cargo_id)) => Ok((boat_id, cargo_id)),
        _ => Err(AppError::BadRequest(MALFORMED_IDENTIFIER.to_string())),
    }
}
