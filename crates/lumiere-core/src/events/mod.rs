//! Domain events emitted by Lumiere operations.
//!
//! Events are handed to an [`EventSink`](crate::traits::EventSink) and
//! consumed by whatever the host wires in (activity feeds, tests).

pub mod navigation;
pub mod share;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use navigation::NavigationEvent;
pub use share::{AccessOutcome, ShareEvent};

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: Uuid,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// A share-related event.
    Share(ShareEvent),
    /// A navigation event.
    Navigation(NavigationEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            payload,
        }
    }
}

impl From<ShareEvent> for DomainEvent {
    fn from(event: ShareEvent) -> Self {
        Self::new(EventPayload::Share(event))
    }
}

impl From<NavigationEvent> for DomainEvent {
    fn from(event: NavigationEvent) -> Self {
        Self::new(EventPayload::Navigation(event))
    }
}
