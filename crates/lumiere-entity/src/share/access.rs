//! Result of resolving a share reference.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use lumiere_core::events::AccessOutcome;
use lumiere_core::types::AlbumId;

use crate::album::Album;

/// What an external viewer holding a share reference may see.
///
/// `Forbidden` is a normal outcome, not an error: the album exists but its
/// owner has not enabled sharing, so only the title is disclosed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AccessResult {
    /// The album is shared; the viewer gets a snapshot of it.
    Granted {
        /// Snapshot of the album at resolve time.
        album: Arc<Album>,
    },
    /// The album exists but sharing is disabled.
    Forbidden {
        /// The referenced album.
        album_id: AlbumId,
        /// Album title, for the explanatory screen.
        title: String,
    },
    /// No album with the referenced id exists.
    NotFound {
        /// The referenced album.
        album_id: AlbumId,
    },
}

impl AccessResult {
    /// The album id the result is about.
    pub fn album_id(&self) -> AlbumId {
        match self {
            Self::Granted { album } => album.id,
            Self::Forbidden { album_id, .. } | Self::NotFound { album_id } => *album_id,
        }
    }

    /// The granted album, if any.
    pub fn granted(&self) -> Option<&Arc<Album>> {
        match self {
            Self::Granted { album } => Some(album),
            _ => None,
        }
    }

    /// Whether the viewer may see photos.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }

    /// The outcome tag recorded in events.
    pub fn outcome(&self) -> AccessOutcome {
        match self {
            Self::Granted { .. } => AccessOutcome::Granted,
            Self::Forbidden { .. } => AccessOutcome::Forbidden,
            Self::NotFound { .. } => AccessOutcome::NotFound,
        }
    }

    /// Message shown to the viewer.
    pub fn message(&self) -> String {
        match self {
            Self::Granted { album } => format!("{} ({} photos)", album.title, album.photo_count()),
            Self::Forbidden { title, .. } => {
                format!("\"{title}\" is not currently shared")
            }
            Self::NotFound { album_id } => format!("Album {album_id} does not exist"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_wire_shape_has_no_photos() {
        let result = AccessResult::Forbidden {
            album_id: AlbumId::new(5).unwrap(),
            title: "Summer Collection".to_string(),
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["outcome"], "forbidden");
        assert_eq!(json["album_id"], 5);
        assert_eq!(json["title"], "Summer Collection");
        assert!(json.get("album").is_none());
    }

    #[test]
    fn test_not_found_message() {
        let result = AccessResult::NotFound {
            album_id: AlbumId::new(42).unwrap(),
        };
        assert_eq!(result.message(), "Album 42 does not exist");
        assert_eq!(result.outcome(), AccessOutcome::NotFound);
        assert!(result.granted().is_none());
    }
}
