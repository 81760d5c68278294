//! Share-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::AlbumId;

/// Outcome of resolving a share reference, as recorded in events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessOutcome {
    /// The album exists and is shared.
    Granted,
    /// The album exists but sharing is disabled.
    Forbidden,
    /// No album with the referenced id exists.
    NotFound,
}

/// Events related to sharing operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShareEvent {
    /// Sharing was turned on for an album.
    SharingEnabled {
        /// The album ID.
        album_id: AlbumId,
    },
    /// Sharing was turned off for an album.
    SharingDisabled {
        /// The album ID.
        album_id: AlbumId,
    },
    /// A share reference was minted.
    ReferenceMinted {
        /// The album ID the reference points at.
        album_id: AlbumId,
    },
    /// An inbound reference was checked against the store.
    AccessResolved {
        /// The referenced album ID.
        album_id: AlbumId,
        /// What the viewer is allowed to see.
        outcome: AccessOutcome,
    },
    /// The viewer left shared preview.
    PreviewExited {
        /// The album that was being previewed.
        album_id: AlbumId,
    },
}
