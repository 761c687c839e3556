//! Orchestration of the measurement workflow.
//!
//! [`WorkflowController`] is the only surface the request boundary talks
//! to. It owns the [`SessionStore`] and never hands out references to it.

use rand::Rng;
use serde::Serialize;

use crate::error::CoreError;
use crate::ingest::{Accepted, IngestGateway};
use crate::session::{Session, SessionStore};
use crate::state_machine::{next_pending, SessionState, Stage};
use crate::threshold::{classify, VitalsStatus, TEMPERATURE_RANGE};
use crate::types::{MeasurementKind, MeasurementOrder, Reading};

/// Both readings plus their classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub temperature: Reading,
    pub bpm: Reading,
    pub status: VitalsStatus,
}

/// Answer to the sensor's "what are you waiting for" poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorPoll {
    /// Waiting for `kind`; `value` is whatever is stored for it so far.
    Waiting {
        kind: MeasurementKind,
        value: Option<Reading>,
    },
    /// Nothing pending: either complete or no session.
    Done,
}

/// Result of a simulated temperature reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedReading {
    pub temperature: Reading,
    /// Whether the value was stored in the session.
    pub applied: bool,
}

#[derive(Debug, Default)]
pub struct WorkflowController {
    store: SessionStore,
}

impl WorkflowController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the session for a new patient.
    pub fn start_session(&self) {
        self.store.reset();
        tracing::debug!("Measurement session reset");
    }

    /// Set the order from the name of the first measurement.
    ///
    /// Anything outside {temperature, pulse} resets the session and returns
    /// `InvalidSelection`.
    pub fn choose_order(&self, first: &str) -> Result<MeasurementOrder, CoreError> {
        let Some(kind) = MeasurementKind::parse(first) else {
            tracing::info!(selection = %first, "Invalid measurement selection, restarting");
            self.start_session();
            return Err(CoreError::InvalidSelection(first.to_string()));
        };

        let order = MeasurementOrder::starting_with(kind);
        self.store.set_order(order);
        tracing::info!(first = %order.first(), second = %order.second(), "Measurement order set");
        Ok(order)
    }

    pub fn current_stage(&self) -> Stage {
        SessionState::of(&self.store.snapshot()).stage()
    }

    pub fn sensor_poll(&self) -> SensorPoll {
        let session = self.store.snapshot();
        match SessionState::of(&session).pending() {
            Some(kind) => SensorPoll::Waiting {
                kind,
                value: session.reading(kind),
            },
            None => SensorPoll::Done,
        }
    }

    /// Apply a sensor upload.
    pub fn ingest(&self, kind: &str, raw_value: &str) -> Result<Accepted, CoreError> {
        match IngestGateway::new(&self.store).submit(kind, raw_value) {
            Ok(accepted) => {
                tracing::info!(kind = %accepted.kind, value = accepted.value, "Sensor reading accepted");
                Ok(accepted)
            }
            Err(err) => {
                match &err {
                    CoreError::NotExpected { expected, received } => tracing::warn!(
                        expected = expected.map(|k| k.as_str()).unwrap_or("none"),
                        %received,
                        "Measurement not expected now",
                    ),
                    other => tracing::warn!(kind, error = %other, value = raw_value, "Sensor reading rejected"),
                }
                Err(err)
            }
        }
    }

    /// Classify the completed readings.
    pub fn evaluate(&self) -> Result<Evaluation, CoreError> {
        let session = self.store.snapshot();
        let (Some(temperature), Some(bpm)) = (
            session.reading(MeasurementKind::Temperature),
            session.reading(MeasurementKind::Pulse),
        ) else {
            tracing::debug!("Evaluation requested before both readings were collected");
            return Err(CoreError::IncompleteSession);
        };

        let status = classify(temperature, bpm);
        tracing::info!(temperature, bpm, ?status, "Vitals evaluated");
        Ok(Evaluation {
            temperature,
            bpm,
            status,
        })
    }

    /// True once both readings are present.
    pub fn is_complete(&self) -> bool {
        self.current_stage() == Stage::Complete
    }

    /// Reset after the prediction step produced a label.
    pub fn complete_prediction(&self) {
        self.store.reset();
        tracing::info!("Prediction produced, session cleared for next patient");
    }

    /// Generate a temperature in the normal range, rounded to 0.1.
    ///
    /// The value is stored only when temperature is the pending measurement,
    /// so the simulated reading moves the session exactly like an upload.
    pub fn simulate_temperature<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulatedReading {
        let raw: Reading = rng.random_range(TEMPERATURE_RANGE.min..=TEMPERATURE_RANGE.max);
        let temperature = (raw * 10.0).round() / 10.0;

        let applied = self.store.update(|session| {
            let pending = next_pending(session.order(), session.readings());
            if pending == Some(MeasurementKind::Temperature) {
                session.insert_reading(MeasurementKind::Temperature, temperature);
                true
            } else {
                false
            }
        });

        tracing::info!(temperature, applied, "Simulated temperature");
        SimulatedReading {
            temperature,
            applied,
        }
    }

    /// Consistent copy of the session for read-only views.
    pub fn snapshot(&self) -> Session {
        self.store.snapshot()
    }
}
