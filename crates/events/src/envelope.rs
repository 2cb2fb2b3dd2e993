use serde::{Deserialize, Serialize};

use crate::Event;

/// Envelope for a published event: stream position + type metadata + payload.
///
/// `sequence_number` is the position of the event in its source log. Consumers
/// can use it as a resume cursor and to spot gaps after a lagging subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEnvelope<E> {
    sequence_number: u64,
    event_type: String,
    event_version: u32,
    payload: E,
}

impl<E: Event> EventEnvelope<E> {
    /// Wrap an event, copying its type and schema version into the envelope.
    pub fn wrap(sequence_number: u64, payload: E) -> Self {
        Self {
            sequence_number,
            event_type: payload.event_type().to_string(),
            event_version: payload.version(),
            payload,
        }
    }
}

impl<E> EventEnvelope<E> {
    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn event_version(&self) -> u32 {
        self.event_version
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }
}
