use axum::{
    routing::{any, get, patch},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        boat::{BoatDto, BoatListDto, BoatPayloadDto, CargoRefDto},
        cargo::{CargoDto, CargoListDto, CargoPayloadDto},
        user::{UserDto, UserListDto},
    },
    server::{
        controller::{
            auth::{callback, error_page, home, login, success},
            boat::{
                self, create_boat, delete_boat, get_boat, list_boats, load_cargo, replace_boat,
                unload_cargo, update_boat,
            },
            cargo::{
                self, create_cargo, delete_cargo, get_cargo, list_cargo, replace_cargo,
                update_cargo,
            },
            user::{self, list_users, method_not_allowed},
        },
        state::AppState,
    },
};

/// OpenAPI document for the JSON API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Boatyard API",
        description = "Boats owned by Google users and the cargo they carry"
    ),
    paths(
        boat::list_boats,
        boat::create_boat,
        boat::get_boat,
        boat::update_boat,
        boat::replace_boat,
        boat::delete_boat,
        boat::load_cargo,
        boat::unload_cargo,
        cargo::list_cargo,
        cargo::create_cargo,
        cargo::get_cargo,
        cargo::update_cargo,
        cargo::replace_cargo,
        cargo::delete_cargo,
        user::list_users,
    ),
    components(schemas(
        ErrorDto,
        BoatDto,
        BoatListDto,
        BoatPayloadDto,
        CargoRefDto,
        CargoDto,
        CargoListDto,
        CargoPayloadDto,
        UserDto,
        UserListDto,
    )),
    tags(
        (name = "boat", description = "Boats owned by the caller"),
        (name = "cargo", description = "Public cargo records"),
        (name = "user", description = "Users who have logged in")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/authenticate", get(login))
        .route("/oauth", get(callback))
        .route("/success", get(success))
        .route("/error", get(error_page))
        .route("/boats", get(list_boats).post(create_boat))
        .route(
            "/boats/{boat_id}",
            get(get_boat)
                .patch(update_boat)
                .put(replace_boat)
                .delete(delete_boat),
        )
        .route(
            "/boats/{boat_id}/cargo/{cargo_id}",
            patch(load_cargo).delete(unload_cargo),
        )
        .route("/cargo", get(list_cargo).post(create_cargo))
        .route(
            "/cargo/{cargo_id}",
            get(get_cargo)
                .patch(update_cargo)
                .put(replace_cargo)
                .delete(delete_cargo),
        )
        .route("/users", get(list_users).fallback(method_not_allowed))
        .route("/users/{*rest}", any(method_not_allowed))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
