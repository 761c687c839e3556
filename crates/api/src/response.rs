//! JSON view types returned by the page endpoints.
//!
//! Each struct carries what a template would need to render the page;
//! presentation itself lives outside this service.

use serde::Serialize;
use vitals_core::types::{MeasurementKind, Reading, VALID_KINDS};

/// `{ "status": "success" }` acknowledgement for sensor uploads.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

/// Landing page: pick the first measurement.
#[derive(Debug, Serialize)]
pub struct SelectMeasurementPage {
    pub title: &'static str,
    pub options: &'static [&'static str],
}

impl Default for SelectMeasurementPage {
    fn default() -> Self {
        Self {
            title: "Health Profile",
            options: VALID_KINDS,
        }
    }
}

/// The measurement currently being taken.
#[derive(Debug, Serialize)]
pub struct MeasurePage {
    pub measurement: MeasurementKind,
    pub title: String,
}

/// Both readings and whether they are within range.
#[derive(Debug, Serialize)]
pub struct MeasurementResultsPage {
    pub temperature: Reading,
    pub bpm: Reading,
    pub normal: bool,
    pub title: &'static str,
}

/// Feature entry form, optionally with a validation error.
#[derive(Debug, Serialize)]
pub struct PredictionFormPage {
    pub features: Vec<String>,
    pub error: Option<String>,
    pub title: &'static str,
}

impl PredictionFormPage {
    pub const TITLE: &'static str = "Drug Prediction for Liver Disease Patients";
}

/// Outcome of the prediction step.
#[derive(Debug, Serialize)]
pub struct PredictionResultPage {
    pub predicted_drug: String,
    pub title: &'static str,
}
