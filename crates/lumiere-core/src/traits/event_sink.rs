//! Event sink trait for domain events.

use crate::events::DomainEvent;

/// Receives domain events as they are emitted.
///
/// Publishing must not fail the operation that produced the event, so the
/// method has no error channel.
pub trait EventSink {
    /// Deliver one event.
    fn publish(&self, event: DomainEvent);
}
