use axum::routing::{get, post};
use axum::Router;

use super::paths;
use crate::handlers::sensor;
use crate::state::AppState;

/// Endpoints used by the sensor device.
///
/// ```text
/// GET  /need_pulse_data      -> need_pulse_data
/// GET  /get_sensor_data      -> get_sensor_data
/// POST /upload_sensor_data   -> upload_sensor_data
/// GET  /simulate_temperature -> simulate_temperature
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(paths::NEED_PULSE_DATA, get(sensor::need_pulse_data))
        .route(paths::GET_SENSOR_DATA, get(sensor::get_sensor_data))
        .route(paths::UPLOAD_SENSOR_DATA, post(sensor::upload_sensor_data))
        .route(paths::SIMULATE_TEMPERATURE, get(sensor::simulate_temperature))
}
