//! Handlers for the human-facing measurement pages.
//!
//! Recoverable workflow errors (invalid selection, incomplete session) are
//! turned into redirects to an earlier page, never into error bodies.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::Deserialize;
use vitals_core::state_machine::Stage;

use crate::response::{MeasurePage, MeasurementResultsPage, SelectMeasurementPage};
use crate::routes::paths;
use crate::state::AppState;

/// Form body for `POST /select_measurement`.
#[derive(Debug, Deserialize)]
pub struct SelectMeasurementForm {
    #[serde(default)]
    pub first_measurement: Option<String>,
}

/// GET /
///
/// Start a new patient: clear the session and offer the measurement choice.
pub async fn home(State(state): State<AppState>) -> Json<SelectMeasurementPage> {
    state.workflow.start_session();
    Json(SelectMeasurementPage::default())
}

/// POST /select_measurement
///
/// Set the measurement order. Invalid or missing input restarts at `/`.
pub async fn select_measurement(
    State(state): State<AppState>,
    Form(input): Form<SelectMeasurementForm>,
) -> Redirect {
    let first = input.first_measurement.unwrap_or_default();
    match state.workflow.choose_order(&first) {
        Ok(_) => Redirect::to(paths::MEASURE),
        Err(_) => Redirect::to(paths::HOME),
    }
}

/// GET /measure
///
/// Show the pending measurement, or move on when there is nothing to take.
pub async fn measure(State(state): State<AppState>) -> Response {
    match state.workflow.current_stage() {
        Stage::NoSession => Redirect::to(paths::HOME).into_response(),
        Stage::Complete => Redirect::to(paths::DISPLAY_MEASUREMENTS).into_response(),
        Stage::Pending(kind) => {
            tracing::debug!(%kind, "Rendering measurement page");
            Json(MeasurePage {
                measurement: kind,
                title: format!("Measure {}", kind.title()),
            })
            .into_response()
        }
    }
}

/// GET /display_measurements
///
/// Show both readings and the range check. Incomplete sessions go back to
/// `/measure`.
pub async fn display_measurements(State(state): State<AppState>) -> Response {
    match state.workflow.evaluate() {
        Ok(evaluation) => Json(MeasurementResultsPage {
            temperature: evaluation.temperature,
            bpm: evaluation.bpm,
            normal: evaluation.status.is_normal(),
            title: "Measurement Results",
        })
        .into_response(),
        Err(_) => Redirect::to(paths::MEASURE).into_response(),
    }
}
