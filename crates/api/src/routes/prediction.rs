use axum::routing::{get, post};
use axum::Router;

use super::paths;
use crate::handlers::prediction;
use crate::state::AppState;

/// ```text
/// GET  /proceed_to_prediction -> proceed_to_prediction
/// POST /predict               -> predict
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            paths::PROCEED_TO_PREDICTION,
            get(prediction::proceed_to_prediction),
        )
        .route(paths::PREDICT, post(prediction::predict))
}
