//! Handlers polled and posted to by the sensor device.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::json;
use vitals_core::types::MeasurementKind;
use vitals_core::workflow::SensorPoll;

use crate::error::{AppError, AppResult};
use crate::response::StatusResponse;
use crate::state::AppState;

/// Form body for `POST /upload_sensor_data`.
#[derive(Debug, Deserialize)]
pub struct UploadReadingForm {
    #[serde(default)]
    pub measurement: String,
    #[serde(default)]
    pub value: String,
}

/// GET /need_pulse_data
///
/// `{ "need_pulse": true }` while pulse is the pending measurement.
pub async fn need_pulse_data(State(state): State<AppState>) -> Json<serde_json::Value> {
    let need_pulse = matches!(
        state.workflow.sensor_poll(),
        SensorPoll::Waiting {
            kind: MeasurementKind::Pulse,
            ..
        }
    );
    Json(json!({ "need_pulse": need_pulse }))
}

/// GET /get_sensor_data
///
/// Value of the pending measurement, keyed by its name, or `{ "done": true }`.
pub async fn get_sensor_data(State(state): State<AppState>) -> Json<serde_json::Value> {
    let body = match state.workflow.sensor_poll() {
        SensorPoll::Waiting { kind, value } => json!({ (kind.as_str()): value }),
        SensorPoll::Done => json!({ "done": true }),
    };
    Json(body)
}

/// POST /upload_sensor_data
///
/// Accept a reading for the pending measurement. Anything else is a 400,
/// including a body that is not a urlencoded form.
pub async fn upload_sensor_data(
    State(state): State<AppState>,
    input: Result<Form<UploadReadingForm>, FormRejection>,
) -> AppResult<Json<StatusResponse>> {
    let Form(input) = input.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Malformed sensor upload body");
        AppError::BadRequest(rejection.body_text())
    })?;
    state.workflow.ingest(&input.measurement, &input.value)?;
    Ok(Json(StatusResponse::success()))
}

/// GET /simulate_temperature
///
/// Stand-in for the temperature sensor: generates a reading in the normal
/// range and stores it when temperature is the pending measurement.
pub async fn simulate_temperature(State(state): State<AppState>) -> Json<serde_json::Value> {
    let reading = state.workflow.simulate_temperature(&mut rand::rng());
    Json(json!({
        "status": "success",
        "temperature": reading.temperature,
    }))
}
