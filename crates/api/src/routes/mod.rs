pub mod health;
pub mod measurement;
pub mod prediction;
pub mod sensor;

use axum::Router;

use crate::state::AppState;

/// Route paths shared by handlers that redirect.
pub mod paths {
    pub const HOME: &str = "/";
    pub const SELECT_MEASUREMENT: &str = "/select_measurement";
    pub const MEASURE: &str = "/measure";
    pub const DISPLAY_MEASUREMENTS: &str = "/display_measurements";
    pub const NEED_PULSE_DATA: &str = "/need_pulse_data";
    pub const GET_SENSOR_DATA: &str = "/get_sensor_data";
    pub const UPLOAD_SENSOR_DATA: &str = "/upload_sensor_data";
    pub const SIMULATE_TEMPERATURE: &str = "/simulate_temperature";
    pub const PROCEED_TO_PREDICTION: &str = "/proceed_to_prediction";
    pub const PREDICT: &str = "/predict";
}

/// Build the workflow route tree.
///
/// The sensor firmware calls these paths directly, so they are mounted at
/// the root rather than under a versioned prefix.
///
/// ```text
/// GET  /                        start session, selection page
/// POST /select_measurement      choose first measurement
/// GET  /measure                 pending measurement page
/// GET  /display_measurements    readings + range check
///
/// GET  /need_pulse_data         sensor poll: is pulse pending
/// GET  /get_sensor_data         sensor poll: pending value / done
/// POST /upload_sensor_data      sensor upload
/// GET  /simulate_temperature    simulated temperature sensor
///
/// GET  /proceed_to_prediction   feature form
/// POST /predict                 run prediction
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(measurement::router())
        .merge(sensor::router())
        .merge(prediction::router())
}
