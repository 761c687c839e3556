#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use vitals_core::predictor::{DrugPredictor, ReferenceProfilePredictor};

use vitals_api::config::ServerConfig;
use vitals_api::router::build_app_router;
use vitals_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        reference_profiles_path: None,
    }
}

/// Build the full application router with the built-in predictor.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(ReferenceProfilePredictor::builtin()))
}

/// Build the full application router around the given predictor.
///
/// Goes through [`build_app_router`] so tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) as production.
pub fn build_test_app_with(predictor: Arc<dyn DrugPredictor>) -> Router {
    let config = test_config();
    let state = AppState::new(config.clone(), predictor);
    build_app_router(state, &config)
}

/// Issue a GET request.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Issue a POST with an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();

    app.clone()
        .oneshot(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Issue a POST with a raw body and an optional `Content-Type`.
pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: Option<&str>,
    body: &'static str,
) -> Response<Body> {
    let mut request = Request::post(uri);
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }

    app.clone()
        .oneshot(request.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert the response is a redirect and return its target.
pub fn redirect_location(response: &Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Drive a fresh app to a completed session with the given readings.
pub async fn complete_session(app: &Router, temperature: &str, pulse: &str) {
    let response = post_form(app, "/select_measurement", &[("first_measurement", "temperature")]).await;
    assert_eq!(redirect_location(&response), "/measure");

    let response = post_form(
        app,
        "/upload_sensor_data",
        &[("measurement", "temperature"), ("value", temperature)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_form(
        app,
        "/upload_sensor_data",
        &[("measurement", "pulse"), ("value", pulse)],
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
