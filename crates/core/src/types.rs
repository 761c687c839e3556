//! Measurement kinds and the order in which they are collected.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Wire name for the temperature measurement.
pub const KIND_TEMPERATURE: &str = "temperature";

/// Wire name for the pulse measurement.
pub const KIND_PULSE: &str = "pulse";

/// All valid measurement names, in display order.
pub const VALID_KINDS: &[&str] = &[KIND_TEMPERATURE, KIND_PULSE];

/// A single numeric sensor reading.
pub type Reading = f64;

// ---------------------------------------------------------------------------
// MeasurementKind
// ---------------------------------------------------------------------------

/// The closed set of measurements the workflow collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKind {
    Temperature,
    Pulse,
}

impl MeasurementKind {
    /// Parse a measurement name, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            KIND_TEMPERATURE => Some(Self::Temperature),
            KIND_PULSE => Some(Self::Pulse),
            _ => None,
        }
    }

    /// Convert to the wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => KIND_TEMPERATURE,
            Self::Pulse => KIND_PULSE,
        }
    }

    /// Capitalised name for page titles ("Temperature", "Pulse").
    pub fn title(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Pulse => "Pulse",
        }
    }

    /// The unique remaining kind.
    pub fn other(&self) -> Self {
        match self {
            Self::Temperature => Self::Pulse,
            Self::Pulse => Self::Temperature,
        }
    }
}

impl std::fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MeasurementOrder
// ---------------------------------------------------------------------------

/// A permutation of {temperature, pulse}.
///
/// The only constructor picks the first kind and derives the second, so a
/// value of this type can never repeat a kind or omit one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasurementOrder([MeasurementKind; 2]);

impl MeasurementOrder {
    pub fn starting_with(first: MeasurementKind) -> Self {
        Self([first, first.other()])
    }

    pub fn first(&self) -> MeasurementKind {
        self.0[0]
    }

    pub fn second(&self) -> MeasurementKind {
        self.0[1]
    }

    pub fn as_slice(&self) -> &[MeasurementKind] {
        &self.0
    }

    pub fn contains(&self, kind: MeasurementKind) -> bool {
        self.0.contains(&kind)
    }
}
