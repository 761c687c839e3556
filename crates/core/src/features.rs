//! Patient feature form parsing for the prediction step.
//!
//! The form is request-scoped: it is parsed, handed to the predictor and
//! dropped. Nothing here touches the measurement session.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Features submitted as free-text categories; every other feature is numeric.
pub const CATEGORICAL_FEATURES: &[&str] =
    &["Sex", "Ascites", "Hepatomegaly", "Spiders", "Edema", "Status"];

pub fn is_categorical(feature: &str) -> bool {
    CATEGORICAL_FEATURES.contains(&feature)
}

/// A single parsed feature value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(String),
}

/// Parsed feature values in schema order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PatientFeatures {
    values: Vec<(String, FeatureValue)>,
}

impl PatientFeatures {
    pub fn get(&self, feature: &str) -> Option<&FeatureValue> {
        self.values
            .iter()
            .find(|(name, _)| name == feature)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse submitted form fields against the ordered feature schema.
///
/// Stops at the first missing or malformed feature. Fields not named in
/// `columns` are ignored.
pub fn parse_form(
    columns: &[String],
    form: &HashMap<String, String>,
) -> Result<PatientFeatures, CoreError> {
    let mut values = Vec::with_capacity(columns.len());

    for feature in columns {
        let raw = match form.get(feature) {
            Some(v) if !v.trim().is_empty() => v,
            _ => return Err(CoreError::MissingFeature(feature.clone())),
        };

        let value = if is_categorical(feature) {
            FeatureValue::Categorical(raw.trim().to_string())
        } else {
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => FeatureValue::Numeric(v),
                _ => {
                    return Err(CoreError::InvalidFeatureValue {
                        feature: feature.clone(),
                        value: raw.clone(),
                    })
                }
            }
        };

        values.push((feature.clone(), value));
    }

    Ok(PatientFeatures { values })
}
