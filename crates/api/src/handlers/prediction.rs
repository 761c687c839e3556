//! Handlers for the drug prediction step.

use std::collections::HashMap;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use vitals_core::features::parse_form;

use crate::error::AppResult;
use crate::response::{PredictionFormPage, PredictionResultPage};
use crate::routes::paths;
use crate::state::AppState;

fn form_page(state: &AppState, error: Option<String>) -> Json<PredictionFormPage> {
    Json(PredictionFormPage {
        features: state.predictor.feature_columns().to_vec(),
        error,
        title: PredictionFormPage::TITLE,
    })
}

/// GET /proceed_to_prediction
///
/// Feature form, available once both readings are collected.
pub async fn proceed_to_prediction(State(state): State<AppState>) -> Response {
    if state.workflow.is_complete() {
        form_page(&state, None).into_response()
    } else {
        Redirect::to(paths::HOME).into_response()
    }
}

/// POST /predict
///
/// Validate the feature form and run the predictor. Validation failures
/// re-render the form and leave the session untouched; a produced
/// prediction clears the session for the next patient.
pub async fn predict(
    State(state): State<AppState>,
    Form(input): Form<HashMap<String, String>>,
) -> AppResult<Response> {
    let features = match parse_form(state.predictor.feature_columns(), &input) {
        Ok(features) => features,
        Err(err) => {
            tracing::info!(error = %err, "Prediction form rejected");
            return Ok(form_page(&state, Some(err.to_string())).into_response());
        }
    };

    let predicted_drug = state.predictor.predict(&features)?;
    tracing::info!(%predicted_drug, "Prediction produced");

    state.workflow.complete_prediction();

    Ok(Json(PredictionResultPage {
        predicted_drug,
        title: "Prediction Result",
    })
    .into_response())
}
