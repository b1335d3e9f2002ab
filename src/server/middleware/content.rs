//! Media type gate for JSON routes.
//!
//! Routes that return JSON require the client to accept it (406 otherwise) and routes
//! that read a body require it to be declared as JSON (415 otherwise). Body parse
//! failures are reported with the API's own error messages instead of axum's.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        request::Parts,
        HeaderMap,
    },
    Json,
};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::server::error::AppError;

pub const UNPARSABLE_JSON: &str = "Unable to parse JSON";
pub const INVALID_ATTRIBUTES: &str = "The request attributes do not meet requirements";

/// Requires the client to accept a JSON response.
pub struct AcceptsJson;

impl<S: Send + Sync> FromRequestParts<S> for AcceptsJson {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if accepts_json(&parts.headers) {
            Ok(AcceptsJson)
        } else {
            Err(AppError::NotAcceptable)
        }
    }
}

/// Requires a JSON request body and a client that accepts a JSON response.
///
/// The content type is checked first, so a request failing both checks gets 415.
pub struct JsonExchange;

impl<S: Send + Sync> FromRequestParts<S> for JsonExchange {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if !sends_json(&parts.headers) {
            return Err(AppError::UnsupportedMediaType);
        }
        if !accepts_json(&parts.headers) {
            return Err(AppError::NotAcceptable);
        }

        Ok(JsonExchange)
    }
}

/// JSON body extractor that maps rejections onto the API's error responses.
///
/// Extraction only checks that the body is well-formed JSON. The body is typed by
/// `parse`, so handlers can authenticate the caller before attribute errors surface.
pub struct JsonBody<T> {
    value: serde_json::Value,
    payload: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> JsonBody<T> {
    /// Deserializes the body into the route's payload type.
    ///
    /// # Returns
    /// - `Ok(T)` - Body matches the payload type
    /// - `Err(AppError::BadRequest)` - Unknown attribute or attribute of the wrong type
    pub fn parse(self) -> Result<T, AppError> {
        serde_json::from_value(self.value).map_err(|err| {
            tracing::debug!("Rejected request body: {}", err);
            AppError::BadRequest(INVALID_ATTRIBUTES.to_string())
        })
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<serde_json::Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody {
                value,
                payload: PhantomData,
            }),
            Err(JsonRejection::MissingJsonContentType(_)) => Err(AppError::UnsupportedMediaType),
            Err(JsonRejection::JsonSyntaxError(_)) => {
                Err(AppError::BadRequest(UNPARSABLE_JSON.to_string()))
            }
            Err(JsonRejection::JsonDataError(rejection)) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                Err(AppError::BadRequest(INVALID_ATTRIBUTES.to_string()))
            }
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// True when no `Accept` header is present or one of its ranges covers `application/json`.
pub fn accepts_json(headers: &HeaderMap) -> bool {
    let mut values = headers.get_all(ACCEPT).iter().peekable();
    if values.peek().is_none() {
        return true;
    }

    values
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(media_essence)
        .any(|range| matches!(range.as_str(), "*/*" | "application/*" | "application/json"))
}

/// True when the `Content-Type` is `application/json` or a `+json` suffix type.
pub fn sends_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(media_essence)
        .is_some_and(|essence| {
            essence == "application/json"
                || (essence.starts_with("application/") && essence.ends_with("+json"))
        })
}

/// Media type without parameters, lowercased.
fn media_essence(value: &str) -> String {
    value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
