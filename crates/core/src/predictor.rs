//! Prediction collaborator: maps a completed feature form to a drug label.
//!
//! The workflow only depends on the [`DrugPredictor`] trait. The bundled
//! [`ReferenceProfilePredictor`] picks the label of the nearest reference
//! profile and can be loaded from a JSON file.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::CoreError;
use crate::features::{FeatureValue, PatientFeatures};

/// Opaque prediction function plus the feature schema it expects.
pub trait DrugPredictor: Send + Sync {
    /// Ordered feature names the form must supply.
    fn feature_columns(&self) -> &[String];

    fn predict(&self, features: &PatientFeatures) -> Result<String, CoreError>;
}

// ---------------------------------------------------------------------------
// Reference profiles
// ---------------------------------------------------------------------------

/// Typical feature values for patients assigned one label.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceProfile {
    pub label: String,
    pub features: HashMap<String, FeatureValue>,
}

/// On-disk format for [`ReferenceProfilePredictor::from_json`].
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSet {
    pub feature_columns: Vec<String>,
    /// Spread used to normalise each numeric feature. Missing entries use 1.0.
    #[serde(default)]
    pub scales: HashMap<String, f64>,
    pub profiles: Vec<ReferenceProfile>,
}

/// Nearest-profile classifier.
///
/// Numeric features contribute `((x - p) / scale)^2`, every categorical
/// mismatch contributes 1. Ties go to the profile listed first.
#[derive(Debug, Clone)]
pub struct ReferenceProfilePredictor {
    set: ProfileSet,
}

impl ReferenceProfilePredictor {
    pub fn new(set: ProfileSet) -> Result<Self, CoreError> {
        if set.feature_columns.is_empty() {
            return Err(CoreError::Internal(
                "reference profiles declare no feature columns".into(),
            ));
        }
        if set.profiles.is_empty() {
            return Err(CoreError::Internal("no reference profiles defined".into()));
        }
        Ok(Self { set })
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let set: ProfileSet = serde_json::from_str(json)
            .map_err(|e| CoreError::Internal(format!("invalid reference profiles: {e}")))?;
        Self::new(set)
    }

    /// Profiles for the two treatment arms of the liver cirrhosis dataset.
    pub fn builtin() -> Self {
        use FeatureValue::{Categorical as C, Numeric as N};

        let columns = [
            "N_Days",
            "Status",
            "Age",
            "Sex",
            "Ascites",
            "Hepatomegaly",
            "Spiders",
            "Edema",
            "Bilirubin",
            "Cholesterol",
            "Albumin",
            "Copper",
            "Alk_Phos",
            "SGOT",
            "Tryglicerides",
            "Platelets",
            "Prothrombin",
            "Stage",
        ];
        let scales = [
            ("N_Days", 1100.0),
            ("Age", 3800.0),
            ("Bilirubin", 4.4),
            ("Cholesterol", 230.0),
            ("Albumin", 0.42),
            ("Copper", 85.0),
            ("Alk_Phos", 2140.0),
            ("SGOT", 57.0),
            ("Tryglicerides", 65.0),
            ("Platelets", 98.0),
            ("Prothrombin", 1.0),
            ("Stage", 0.88),
        ];

        let profile = |label: &str, values: Vec<FeatureValue>| ReferenceProfile {
            label: label.to_string(),
            features: columns
                .iter()
                .map(|c| c.to_string())
                .zip(values)
                .collect(),
        };

        let s = |v: &str| C(v.to_string());

        Self {
            set: ProfileSet {
                feature_columns: columns.iter().map(|c| c.to_string()).collect(),
                scales: scales.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
                profiles: vec![
                    profile(
                        "D-penicillamine",
                        vec![
                            N(2015.0),
                            s("C"),
                            N(18422.0),
                            s("F"),
                            s("N"),
                            s("Y"),
                            s("N"),
                            s("N"),
                            N(2.87),
                            N(365.0),
                            N(3.52),
                            N(97.6),
                            N(2021.0),
                            N(120.0),
                            N(124.0),
                            N(259.0),
                            N(10.8),
                            N(3.0),
                        ],
                    ),
                    profile(
                        "Placebo",
                        vec![
                            N(1997.0),
                            s("D"),
                            N(18978.0),
                            s("F"),
                            s("N"),
                            s("N"),
                            s("N"),
                            s("N"),
                            N(3.65),
                            N(373.0),
                            N(3.52),
                            N(97.7),
                            N(1943.0),
                            N(124.0),
                            N(125.0),
                            N(265.0),
                            N(10.7),
                            N(3.1),
                        ],
                    ),
                ],
            },
        }
    }

    fn distance(&self, profile: &ReferenceProfile, features: &PatientFeatures) -> f64 {
        features
            .iter()
            .filter_map(|(name, value)| {
                let reference = profile.features.get(name)?;
                match (value, reference) {
                    (FeatureValue::Numeric(x), FeatureValue::Numeric(p)) => {
                        let scale = self
                            .set
                            .scales
                            .get(name)
                            .copied()
                            .filter(|s| *s > 0.0)
                            .unwrap_or(1.0);
                        Some(((x - p) / scale).powi(2))
                    }
                    (FeatureValue::Categorical(x), FeatureValue::Categorical(p)) => {
                        Some(if x.eq_ignore_ascii_case(p) { 0.0 } else { 1.0 })
                    }
                    _ => Some(1.0),
                }
            })
            .sum()
    }
}

impl DrugPredictor for ReferenceProfilePredictor {
    fn feature_columns(&self) -> &[String] {
        &self.set.feature_columns
    }

    fn predict(&self, features: &PatientFeatures) -> Result<String, CoreError> {
        let best = self
            .set
            .profiles
            .iter()
            .map(|p| (p, self.distance(p, features)))
            .fold(None, |best: Option<(&ReferenceProfile, f64)>, (p, d)| match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((p, d)),
            });

        let (profile, distance) =
            best.ok_or_else(|| CoreError::Internal("no reference profiles defined".into()))?;
        tracing::debug!(label = %profile.label, distance, "Nearest reference profile");
        Ok(profile.label.clone())
    }
}
