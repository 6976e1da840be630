#![allow(clippy::unwrap_used)]

//! Drives an `axum::Router` end to end and checks that every failure path
//! renders the JSON:API error envelope with the right status.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::{get, put},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use jsonapi_axum::{MEDIA_TYPE, RequestFault, rescue_middleware};

async fn explode() -> Result<(), RequestFault> {
    Err(RequestFault::from(anyhow::anyhow!("tada")))
}

async fn missing() -> Result<(), RequestFault> {
    Err(RequestFault::MissingParameter("note".to_owned()))
}

async fn absent() -> Result<(), RequestFault> {
    Err(RequestFault::NotFound)
}

async fn ok() -> &'static str {
    "plain"
}

fn app() -> Router {
    Router::new()
        .route("/explode", get(explode))
        .route("/missing", put(missing))
        .route("/absent", get(absent))
        .route("/ok", get(ok))
        .layer(middleware::from_fn(rescue_middleware))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn unclassified_fault_renders_500_envelope() {
    let response = app()
        .oneshot(Request::get("/explode").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers()[axum::http::header::CONTENT_TYPE],
        MEDIA_TYPE
    );
    assert_eq!(
        body_json(response).await,
        json!({
            "errors": [{
                "status": "500",
                "code": "internal_server_error",
                "title": "Internal Server Error",
                "detail": "tada"
            }]
        })
    );
}

#[tokio::test]
async fn not_found_fault_renders_fixed_detail() {
    let response = app()
        .oneshot(Request::get("/absent").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({
            "errors": [{
                "status": "404",
                "code": "not_found",
                "title": "Not Found",
                "detail": "Resource not found"
            }]
        })
    );
}

#[tokio::test]
async fn missing_parameter_renders_422_envelope() {
    let response = app()
        .oneshot(Request::put("/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await,
        json!({
            "errors": [{
                "status": "422",
                "code": "unprocessable_entity",
                "title": "Unprocessable Entity",
                "detail": "Required parameter missing or invalid"
            }]
        })
    );
}

#[tokio::test]
async fn routing_miss_is_rewrapped_by_the_middleware() {
    let response = app()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["code"], "not_found");
    assert_eq!(body["errors"][0]["detail"], "Resource not found");
}

#[tokio::test]
async fn successful_responses_pass_through_untouched() {
    let response = app()
        .oneshot(Request::get("/ok").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"plain");
}

#[tokio::test]
async fn enveloped_error_responses_are_not_double_wrapped() {
    let response = app()
        .oneshot(Request::get("/explode").body(Body::empty()).unwrap())
        .await
        .unwrap();

    // The handler's envelope survives; the middleware must not replace
    // its detail with the bare-status fallback.
    let body = body_json(response).await;
    assert_eq!(body["errors"][0]["detail"], "tada");
}
