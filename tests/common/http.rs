#![allow(dead_code)]

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use http_body_util::BodyExt;
use pankh_gatekeeper::Gatekeeper;
use pankh_gatekeeper::app::App;
use pankh_gatekeeper::constants::header;
use pankh_gatekeeper::error::AppError;
use pankh_gatekeeper::routes::ApiPrefix;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// Counts how many times any downstream handler ran.
#[derive(Clone, Default)]
pub struct Downstream {
    hits: Arc<AtomicUsize>,
}

impl Downstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn portal_app(gatekeeper: Gatekeeper, downstream: &Downstream) -> Router {
    let users = Router::new()
        .route("/", get(list_users))
        .route("/fail", get(failing_users))
        .route("/panic", get(panicking_users))
        .route("/spoofed", get(spoofing_users))
        .with_state(downstream.clone());
    let donate = Router::new()
        .route("/", post(create_donation))
        .with_state(downstream.clone());

    App::new(gatekeeper)
        .mount(ApiPrefix::Users, users)
        .mount(ApiPrefix::Donate, donate)
        .into_router()
}

async fn list_users(State(downstream): State<Downstream>) -> Json<Value> {
    downstream.hit();
    Json(json!([{ "name": "Asha" }]))
}

async fn failing_users(State(downstream): State<Downstream>) -> Result<Json<Value>, AppError> {
    downstream.hit();
    Err(AppError::internal("users collection unavailable"))
}

async fn panicking_users(State(downstream): State<Downstream>) -> &'static str {
    downstream.hit();
    panic!("downstream handler crashed")
}

async fn spoofing_users(State(downstream): State<Downstream>) -> impl IntoResponse {
    downstream.hit();
    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "https://handler.example"),
            (header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
        ],
        Json(json!([])),
    )
}

async fn create_donation(
    State(downstream): State<Downstream>,
    Json(_payload): Json<Value>,
) -> StatusCode {
    downstream.hit();
    StatusCode::CREATED
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

pub fn build_request(method: &str, uri: &str, origin: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(origin) = origin {
        builder = builder.header(header::ORIGIN, origin);
    }
    builder.body(Body::empty()).expect("valid request")
}

pub async fn send(router: &Router, method: &str, uri: &str, origin: Option<&str>) -> TestResponse {
    send_request(router, build_request(method, uri, origin)).await
}

pub async fn send_request(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    into_test_response(response).await
}

pub async fn into_test_response(response: axum::response::Response) -> TestResponse {
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).expect("body should be utf-8"),
    }
}
