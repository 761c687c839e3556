use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use vitals_core::state_machine::Stage;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Where the active measurement session currently stands.
    pub session: Stage,
}

/// GET /health -- returns service status and the current session stage.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        session: state.workflow.current_stage(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
