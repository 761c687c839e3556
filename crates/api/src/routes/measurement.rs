use axum::routing::{get, post};
use axum::Router;

use super::paths;
use crate::handlers::workflow;
use crate::state::AppState;

/// Human-facing measurement pages.
///
/// ```text
/// GET  /                     -> home
/// POST /select_measurement   -> select_measurement
/// GET  /measure              -> measure
/// GET  /display_measurements -> display_measurements
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(paths::HOME, get(workflow::home))
        .route(paths::SELECT_MEASUREMENT, post(workflow::select_measurement))
        .route(paths::MEASURE, get(workflow::measure))
        .route(
            paths::DISPLAY_MEASUREMENTS,
            get(workflow::display_measurements),
        )
}
