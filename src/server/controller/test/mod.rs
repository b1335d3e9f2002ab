//! Request-level tests that drive the full router.

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{router::router, state::AppState};


const BASE_URL: &str = "http://localhost:8080";

const TOKEN_A: &str = "token-a";
const SUBJECT_A: &str = "subject-a";
const TOKEN_B: &str = "token-b";
const SUBJECT_B: &str = "subject-b";

/// Router wired to an in-memory database whose verifier knows `TOKEN_A` and `TOKEN_B`.
struct TestApp {
    _test: TestContext,
    db: DatabaseConnection,
    router: Router,
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .unwrap()
    }
}

impl TestApp {
    async fn new() -> Self {
        let test = TestBuilder::new()
            .with_boatyard_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
        session_store.migrate().await.unwrap();

        let state = AppState::for_test(db.clone(), &[(TOKEN_A, SUBJECT_A), (TOKEN_B, SUBJECT_B)]);
        let router = router()
            .with_state(state)
            .layer(SessionManagerLayer::new(session_store).with_secure(false));

        Self {
            _test: test,
            db,
            router,
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            headers,
            body,
        }
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(request(Method::GET, uri, token, None)).await
    }

    async fn send_json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> TestResponse {
        self.send(request(method, uri, token, Some(body))).await
    }
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Strips the public base URL so a `next` or `self` link can be requested again.
fn path_of(link: &Value) -> String {
    link.as_str().unwrap().trim_start_matches(BASE_URL).to_string()
}
