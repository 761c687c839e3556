use crate::types::MeasurementKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid measurement selection: '{0}'")]
    InvalidSelection(String),

    #[error("Measurement not expected now")]
    NotExpected {
        expected: Option<MeasurementKind>,
        received: String,
    },

    #[error("Invalid data format")]
    InvalidFormat { value: String },

    #[error("Both measurements are required before evaluation")]
    IncompleteSession,

    #[error("Missing value for feature '{0}'. Please fill out all fields.")]
    MissingFeature(String),

    #[error(
        "Invalid value for feature '{feature}': '{value}'. Please enter valid numerical values."
    )]
    InvalidFeatureValue { feature: String, value: String },

    #[error("Internal error: {0}")]
    Internal(String),
}
