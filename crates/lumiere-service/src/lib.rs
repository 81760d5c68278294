//! # lumiere-service
//!
//! Business logic for Lumiere's shared-album links. The album store is an
//! explicit object passed into every operation that reads or mutates
//! albums, so hosts and tests supply their own.
//!
//! All operations are synchronous and run to completion; ordering between
//! sharing toggles and access checks is the caller's event order.

pub mod album;
pub mod events;
pub mod matching;
pub mod navigation;
pub mod session;
pub mod share;

pub use album::{AlbumStore, InMemoryAlbumStore};
pub use events::MemoryEventSink;
pub use matching::{FaceMatchService, FixedScorer, MatchScorer, PhotoMatch, RandomScorer};
pub use navigation::{NavigationHistory, ScreenRouter, ViewRouter};
pub use session::{SessionState, ViewingSession};
pub use share::{AccessService, LinkService, ShareLinkController};
