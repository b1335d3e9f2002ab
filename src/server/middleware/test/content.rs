use axum::{
    body::Body,
    extract::{FromRequest, FromRequestParts},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderMap, HeaderValue, Request,
    },
};

use crate::{
    model::boat::BoatPayloadDto,
    server::{
        error::AppError,
        middleware::content::{
            accepts_json, sends_json, AcceptsJson, JsonBody, JsonExchange, INVALID_ATTRIBUTES,
            UNPARSABLE_JSON,
        },
    },
};

fn headers(pairs: &[(axum::http::HeaderName, &'static str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in pairs {
        map.append(name.clone(), HeaderValue::from_static(value));
    }
    map
}

fn json_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[test]
fn accepts_json_compatible_ranges() {
    assert!(accepts_json(&HeaderMap::new()));
    assert!(accepts_json(&headers(&[(ACCEPT, "*/*")])));
    assert!(accepts_json(&headers(&[(ACCEPT, "application/*")])));
    assert!(accepts_json(&headers(&[(ACCEPT, "text/html, application/json;q=0.9")])));
}

#[test]
fn refuses_non_json_ranges() {
    assert!(!accepts_json(&headers(&[(ACCEPT, "text/html")])));
    assert!(!accepts_json(&headers(&[(ACCEPT, "text/*, image/png")])));
}

#[test]
fn recognises_json_content_types() {
    assert!(sends_json(&headers(&[(CONTENT_TYPE, "application/json")])));
    assert!(sends_json(&headers(&[(
        CONTENT_TYPE,
        "application/json; charset=utf-8"
    )])));
    assert!(!sends_json(&headers(&[(CONTENT_TYPE, "text/plain")])));
    assert!(!sends_json(&HeaderMap::new()));
}

/// Tests that a non-JSON Accept header yields 406.
///
/// Expected: Err(AppError::NotAcceptable)
#[tokio::test]
async fn accepts_json_rejects_html_only_clients() {
    let request = Request::builder()
        .header(ACCEPT, "text/html")
        .body(Body::empty())
        .unwrap();
    let (mut parts, _) = request.into_parts();

    let result = AcceptsJson::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(AppError::NotAcceptable)));
}

/// Tests that the content type is checked before Accept.
///
/// Expected: Err(AppError::UnsupportedMediaType) when both are wrong
#[tokio::test]
async fn json_exchange_checks_content_type_first() {
    let request = Request::builder()
        .header(CONTENT_TYPE, "text/plain")
        .header(ACCEPT, "text/html")
        .body(Body::empty())
        .unwrap();
    let (mut parts, _) = request.into_parts();

    let result = JsonExchange::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(AppError::UnsupportedMediaType)));
}

/// Tests that malformed JSON yields the parse error message.
///
/// Expected: Err(AppError::BadRequest("Unable to parse JSON"))
#[tokio::test]
async fn json_body_reports_syntax_errors() {
    let result = JsonBody::<BoatPayloadDto>::from_request(json_request("{\"name\": "), &()).await;

    assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == UNPARSABLE_JSON));
}

/// Tests that unknown fields and wrong types are rejected once the body is typed.
///
/// Extraction succeeds so the handler can authenticate first; `parse` then fails.
///
/// Expected: Err(AppError::BadRequest("The request attributes do not meet requirements"))
#[tokio::test]
async fn json_body_reports_invalid_attributes_on_parse() {
    let extra = JsonBody::<BoatPayloadDto>::from_request(
        json_request(r#"{"name": "Odyssey", "type": "Yacht", "length": 28, "color": "red"}"#),
        &(),
    )
    .await
    .unwrap();
    let wrong_type = JsonBody::<BoatPayloadDto>::from_request(
        json_request(r#"{"name": "Odyssey", "type": "Yacht", "length": "long"}"#),
        &(),
    )
    .await
    .unwrap();

    assert!(matches!(extra.parse(), Err(AppError::BadRequest(msg)) if msg == INVALID_ATTRIBUTES));
    assert!(
        matches!(wrong_type.parse(), Err(AppError::BadRequest(msg)) if msg == INVALID_ATTRIBUTES)
    );
}

/// Tests that a well-formed body is parsed.
///
/// Expected: Ok(BoatPayloadDto) with every field populated
#[tokio::test]
async fn json_body_parses_valid_payload() {
    let payload = JsonBody::<BoatPayloadDto>::from_request(
        json_request(r#"{"name": "Odyssey", "type": "Yacht", "length": 28}"#),
        &(),
    )
    .await
    .unwrap()
    .parse()
    .unwrap();

    assert_eq!(payload.name.as_deref(), Some("Odyssey"));
    assert_eq!(payload.kind.as_deref(), Some("Yacht"));
    assert_eq!(payload.length, Some(28));
    assert!(payload.id.is_none());
}
