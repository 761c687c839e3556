//! Pure progress logic over a session snapshot.
//!
//! [`next_pending`] is the only place that decides which measurement is
//! expected. Ingest, polling and evaluation all derive from it.
//!
//! ```text
//! Unset --set_order--> AwaitingFirst --ingest--> AwaitingSecond --ingest--> Complete
//!   ^                                                                          |
//!   +-------------------------------- reset -----------------------------------+
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::session::Session;
use crate::types::{MeasurementKind, MeasurementOrder, Reading};

/// First kind in `order` without a reading, or `None` once all are present
/// (or when there is no order at all).
pub fn next_pending(
    order: Option<&MeasurementOrder>,
    readings: &HashMap<MeasurementKind, Reading>,
) -> Option<MeasurementKind> {
    order?
        .as_slice()
        .iter()
        .copied()
        .find(|kind| !readings.contains_key(kind))
}

/// Lifecycle state of the measurement session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No order chosen.
    Unset,
    AwaitingFirst(MeasurementKind),
    AwaitingSecond(MeasurementKind),
    Complete,
}

impl SessionState {
    pub fn of(session: &Session) -> Self {
        let Some(order) = session.order() else {
            return Self::Unset;
        };
        match next_pending(Some(order), session.readings()) {
            Some(kind) if kind == order.first() => Self::AwaitingFirst(kind),
            Some(kind) => Self::AwaitingSecond(kind),
            None => Self::Complete,
        }
    }

    pub fn pending(&self) -> Option<MeasurementKind> {
        match self {
            Self::AwaitingFirst(kind) | Self::AwaitingSecond(kind) => Some(*kind),
            Self::Unset | Self::Complete => None,
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            Self::Unset => Stage::NoSession,
            Self::AwaitingFirst(kind) | Self::AwaitingSecond(kind) => Stage::Pending(*kind),
            Self::Complete => Stage::Complete,
        }
    }
}

/// What the workflow is waiting for, as seen from the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "stage", content = "measurement")]
pub enum Stage {
    NoSession,
    Pending(MeasurementKind),
    Complete,
}
