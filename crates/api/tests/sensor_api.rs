//! Integration tests for the sensor-facing endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, complete_session, get, post_form, post_raw};

async fn upload(app: &axum::Router, measurement: &str, value: &str) -> (StatusCode, serde_json::Value) {
    let response = post_form(
        app,
        "/upload_sensor_data",
        &[("measurement", measurement), ("value", value)],
    )
    .await;
    let status = response.status();
    (status, body_json(response).await)
}

// ---------------------------------------------------------------------------
// Test: need_pulse_data follows the pending measurement
// ---------------------------------------------------------------------------

#[tokio::test]
async fn need_pulse_tracks_pending_measurement() {
    let app = common::build_test_app();

    let json = body_json(get(&app, "/need_pulse_data").await).await;
    assert_eq!(json["need_pulse"], false);

    post_form(&app, "/select_measurement", &[("first_measurement", "temperature")]).await;
    let json = body_json(get(&app, "/need_pulse_data").await).await;
    assert_eq!(json["need_pulse"], false);

    upload(&app, "temperature", "36.8").await;
    let json = body_json(get(&app, "/need_pulse_data").await).await;
    assert_eq!(json["need_pulse"], true);
}

// ---------------------------------------------------------------------------
// Test: get_sensor_data keys the response by the pending measurement
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_sensor_data_reports_pending_then_done() {
    let app = common::build_test_app();

    let json = body_json(get(&app, "/get_sensor_data").await).await;
    assert_eq!(json, serde_json::json!({ "done": true }));

    post_form(&app, "/select_measurement", &[("first_measurement", "pulse")]).await;
    let json = body_json(get(&app, "/get_sensor_data").await).await;
    assert_eq!(json, serde_json::json!({ "pulse": null }));

    upload(&app, "pulse", "65").await;
    let json = body_json(get(&app, "/get_sensor_data").await).await;
    assert_eq!(json, serde_json::json!({ "temperature": null }));

    upload(&app, "temperature", "36.9").await;
    let json = body_json(get(&app, "/get_sensor_data").await).await;
    assert_eq!(json, serde_json::json!({ "done": true }));
}

// ---------------------------------------------------------------------------
// Test: accepted upload returns {"status": "success"}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_expected_measurement_succeeds() {
    let app = common::build_test_app();
    post_form(&app, "/select_measurement", &[("first_measurement", "pulse")]).await;

    let (status, json) = upload(&app, "PULSE", "72").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "status": "success" }));
}

// ---------------------------------------------------------------------------
// Test: upload without a session is not expected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_without_session_is_rejected() {
    let app = common::build_test_app();

    let (status, json) = upload(&app, "pulse", "72").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Measurement not expected now");
}

// ---------------------------------------------------------------------------
// Test: duplicate upload for an accepted kind is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn duplicate_upload_is_rejected() {
    let app = common::build_test_app();
    post_form(&app, "/select_measurement", &[("first_measurement", "pulse")]).await;

    let (status, _) = upload(&app, "pulse", "72").await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = upload(&app, "pulse", "95").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Measurement not expected now");
}

// ---------------------------------------------------------------------------
// Test: unknown measurement name is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_measurement_is_rejected() {
    let app = common::build_test_app();
    post_form(&app, "/select_measurement", &[("first_measurement", "pulse")]).await;

    let (status, json) = upload(&app, "spo2", "98").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "NOT_EXPECTED");
}

// ---------------------------------------------------------------------------
// Test: malformed value is rejected and leaves no residue
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_value_is_rejected_then_retry_succeeds() {
    let app = common::build_test_app();
    post_form(&app, "/select_measurement", &[("first_measurement", "pulse")]).await;

    let (status, json) = upload(&app, "pulse", "abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Invalid data format");

    let json = body_json(get(&app, "/need_pulse_data").await).await;
    assert_eq!(json["need_pulse"], true);

    let (status, _) = upload(&app, "pulse", "72").await;
    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: complete session rejects further uploads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn complete_session_rejects_uploads() {
    let app = common::build_test_app();
    complete_session(&app, "37.0", "72").await;

    for kind in ["temperature", "pulse"] {
        let (status, _) = upload(&app, kind, "70").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

// ---------------------------------------------------------------------------
// Test: concurrent uploads for the pending kind accept exactly one
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_uploads_accept_exactly_one() {
    let app = common::build_test_app();
    post_form(&app, "/select_measurement", &[("first_measurement", "pulse")]).await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move { upload(&app, "pulse", "72").await.0 })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }

    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::OK).count(), 1);
    assert_eq!(
        statuses
            .iter()
            .filter(|s| **s == StatusCode::BAD_REQUEST)
            .count(),
        7
    );
}

// ---------------------------------------------------------------------------
// Test: simulate_temperature returns a value in the normal range
// ---------------------------------------------------------------------------

#[tokio::test]
async fn simulate_temperature_fills_pending_temperature() {
    let app = common::build_test_app();
    post_form(&app, "/select_measurement", &[("first_measurement", "temperature")]).await;

    let response = get(&app, "/simulate_temperature").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");
    let temperature = json["temperature"].as_f64().unwrap();
    assert!((36.0..=38.0).contains(&temperature));

    let json = body_json(get(&app, "/need_pulse_data").await).await;
    assert_eq!(json["need_pulse"], true);
}

// ---------------------------------------------------------------------------
// Test: a simulated temperature never jumps ahead of a pending pulse
// ---------------------------------------------------------------------------

#[tokio::test]
async fn simulate_temperature_waits_for_pending_pulse() {
    let app = common::build_test_app();
    post_form(&app, "/select_measurement", &[("first_measurement", "pulse")]).await;

    let response = get(&app, "/simulate_temperature").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "success");

    let json = body_json(get(&app, "/need_pulse_data").await).await;
    assert_eq!(json["need_pulse"], true);

    let (status, _) = upload(&app, "pulse", "72").await;
    assert_eq!(status, StatusCode::OK);

    let json = body_json(get(&app, "/get_sensor_data").await).await;
    assert_eq!(json, serde_json::json!({ "temperature": null }));

    let (status, json) = upload(&app, "temperature", "36.9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "success");
}

// ---------------------------------------------------------------------------
// Test: a body that is not a urlencoded form gets the JSON error shape
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_with_json_body_returns_400() {
    let app = common::build_test_app();
    post_form(&app, "/select_measurement", &[("first_measurement", "temperature")]).await;

    let response = post_raw(
        &app,
        "/upload_sensor_data",
        Some("application/json"),
        r#"{"measurement":"temperature","value":"36.8"}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));

    let json = body_json(get(&app, "/get_sensor_data").await).await;
    assert_eq!(json, serde_json::json!({ "temperature": null }));
}

#[tokio::test]
async fn upload_without_content_type_returns_400() {
    let app = common::build_test_app();
    post_form(&app, "/select_measurement", &[("first_measurement", "pulse")]).await;

    let response = post_raw(&app, "/upload_sensor_data", None, "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "BAD_REQUEST");
}
