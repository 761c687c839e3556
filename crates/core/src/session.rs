//! The single shared measurement session.
//!
//! Every read and write goes through one `Mutex`. Callers that need to
//! check-then-act (ingest) do so inside [`SessionStore::update`] so the
//! check and the write happen under one lock acquisition.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::{MeasurementKind, MeasurementOrder, Reading};

/// Point-in-time state of the measurement session.
///
/// `readings` only ever holds kinds that appear in `order`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    order: Option<MeasurementOrder>,
    readings: HashMap<MeasurementKind, Reading>,
}

impl Session {
    pub fn order(&self) -> Option<&MeasurementOrder> {
        self.order.as_ref()
    }

    pub fn readings(&self) -> &HashMap<MeasurementKind, Reading> {
        &self.readings
    }

    pub fn reading(&self, kind: MeasurementKind) -> Option<Reading> {
        self.readings.get(&kind).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_none() && self.readings.is_empty()
    }

    /// Insert or overwrite a reading. Kinds outside the order are dropped.
    pub(crate) fn insert_reading(&mut self, kind: MeasurementKind, value: Reading) {
        match self.order {
            Some(order) if order.contains(kind) => {
                self.readings.insert(kind, value);
            }
            _ => {
                tracing::warn!(%kind, "Dropped reading outside the active order");
            }
        }
    }
}

/// Mutex-guarded owner of the process-wide [`Session`].
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Mutex<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear order and readings.
    pub fn reset(&self) {
        *self.lock() = Session::default();
    }

    /// Replace the order and clear all readings.
    pub fn set_order(&self, order: MeasurementOrder) {
        *self.lock() = Session {
            order: Some(order),
            readings: HashMap::new(),
        };
    }

    /// Consistent copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    /// Insert or overwrite a single reading.
    pub fn put_reading(&self, kind: MeasurementKind, value: Reading) {
        self.lock().insert_reading(kind, value);
    }

    /// Run `f` with exclusive access to the session.
    ///
    /// `f` must not block; it runs while every other caller waits.
    pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.lock())
    }

    // Each mutation is a single assignment, so a poisoned guard still holds
    // a valid session.
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
