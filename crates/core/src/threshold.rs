//! Clinical range check for a completed pair of readings.

use serde::Serialize;

use crate::types::Reading;

/// Inclusive `[min, max]` range for a vital sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalRange {
    pub min: Reading,
    pub max: Reading,
}

impl VitalRange {
    pub fn contains(&self, value: Reading) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Normal body temperature in degrees Celsius.
pub const TEMPERATURE_RANGE: VitalRange = VitalRange {
    min: 36.0,
    max: 38.0,
};

/// Normal resting heart rate in beats per minute.
pub const PULSE_RANGE: VitalRange = VitalRange {
    min: 60.0,
    max: 100.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalsStatus {
    Normal,
    Abnormal,
}

impl VitalsStatus {
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Normal iff both readings fall inside their ranges (bounds inclusive).
pub fn classify(temperature: Reading, bpm: Reading) -> VitalsStatus {
    if TEMPERATURE_RANGE.contains(temperature) && PULSE_RANGE.contains(bpm) {
        VitalsStatus::Normal
    } else {
        VitalsStatus::Abnormal
    }
}
