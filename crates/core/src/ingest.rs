//! Validation and application of sensor uploads.

use crate::error::CoreError;
use crate::session::SessionStore;
use crate::state_machine::next_pending;
use crate::types::{MeasurementKind, Reading};

/// A reading that was written to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accepted {
    pub kind: MeasurementKind,
    pub value: Reading,
}

/// Applies sensor uploads to a [`SessionStore`].
///
/// Only the currently pending kind is accepted. Because an accepted kind is
/// never pending again within the same session, readings are append-only.
pub struct IngestGateway<'a> {
    store: &'a SessionStore,
}

impl<'a> IngestGateway<'a> {
    pub fn new(store: &'a SessionStore) -> Self {
        Self { store }
    }

    /// Check the expectation and write the reading in one critical section.
    ///
    /// Unknown measurement names are reported as `NotExpected` since they
    /// can never match the pending kind.
    pub fn submit(&self, kind: &str, raw_value: &str) -> Result<Accepted, CoreError> {
        let parsed_kind = MeasurementKind::parse(kind);

        self.store.update(|session| {
            let expected = next_pending(session.order(), session.readings());

            let kind = match parsed_kind {
                Some(k) if Some(k) == expected => k,
                _ => {
                    return Err(CoreError::NotExpected {
                        expected,
                        received: kind.trim().to_ascii_lowercase(),
                    });
                }
            };

            let value = parse_reading(raw_value)?;
            session.insert_reading(kind, value);
            Ok(Accepted { kind, value })
        })
    }
}

/// Parse a raw sensor value as a finite number.
pub fn parse_reading(raw: &str) -> Result<Reading, CoreError> {
    raw.trim()
        .parse::<Reading>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoreError::InvalidFormat {
            value: raw.to_string(),
        })
}
