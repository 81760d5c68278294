//! In-memory event sink.

use std::cell::RefCell;

use lumiere_core::events::{DomainEvent, EventPayload};
use lumiere_core::traits::EventSink;

/// Records every published event in order.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: RefCell<Vec<DomainEvent>>,
}

impl MemoryEventSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads of the recorded events, oldest first.
    pub fn payloads(&self) -> Vec<EventPayload> {
        self.events
            .borrow()
            .iter()
            .map(|event| event.payload.clone())
            .collect()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<DomainEvent> {
        self.events.take()
    }
}

impl EventSink for MemoryEventSink {
    fn publish(&self, event: DomainEvent) {
        self.events.borrow_mut().push(event);
    }
}
