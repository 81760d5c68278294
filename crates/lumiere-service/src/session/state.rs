//! Viewing session states.

use std::sync::Arc;

use serde::Serialize;

use lumiere_entity::album::Album;
use lumiere_entity::share::{AccessResult, ShareReference};

/// Where a viewer stands with respect to a share reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// No reference in the location; normal navigation.
    Idle,
    /// A reference was observed and is about to be checked.
    AwaitingResolve {
        /// The observed reference.
        reference: ShareReference,
    },
    /// The album exists but is not shared.
    Forbidden {
        /// The observed reference.
        reference: ShareReference,
        /// Album title shown on the explanatory screen.
        title: String,
    },
    /// No album matches the reference.
    NotFound {
        /// The observed reference.
        reference: ShareReference,
    },
    /// The album is shared; the viewer holds this snapshot.
    Granted {
        /// The observed reference.
        reference: ShareReference,
        /// Album snapshot taken at resolve time.
        album: Arc<Album>,
    },
}

impl SessionState {
    /// The state a resolved reference leads to.
    pub fn resolved(reference: ShareReference, access: AccessResult) -> Self {
        match access {
            AccessResult::Granted { album } => Self::Granted { reference, album },
            AccessResult::Forbidden { title, .. } => Self::Forbidden { reference, title },
            AccessResult::NotFound { .. } => Self::NotFound { reference },
        }
    }

    /// The reference the session is tracking, if any.
    pub fn reference(&self) -> Option<&ShareReference> {
        match self {
            Self::Idle => None,
            Self::AwaitingResolve { reference }
            | Self::Forbidden { reference, .. }
            | Self::NotFound { reference }
            | Self::Granted { reference, .. } => Some(reference),
        }
    }

    /// Whether the state is one of the resolved outcomes.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Forbidden { .. } | Self::NotFound { .. } | Self::Granted { .. }
        )
    }

    /// Short name of the state, for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingResolve { .. } => "awaiting_resolve",
            Self::Forbidden { .. } => "forbidden",
            Self::NotFound { .. } => "not_found",
            Self::Granted { .. } => "granted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_core::types::AlbumId;
    use lumiere_entity::album::CreateAlbum;

    use crate::album::{AlbumStore, InMemoryAlbumStore};

    fn reference(id: u64) -> ShareReference {
        ShareReference::new(AlbumId::new(id).unwrap())
    }

    #[test]
    fn test_forbidden_wire_shape() {
        let state = SessionState::Forbidden {
            reference: reference(3),
            title: "Summer Collection".to_string(),
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["state"], "forbidden");
        assert_eq!(json["reference"]["album_id"], 3);
        assert_eq!(json["title"], "Summer Collection");
        assert!(json.get("album").is_none());
    }

    #[test]
    fn test_granted_carries_album_snapshot() {
        let mut store = InMemoryAlbumStore::new();
        let album = store
            .create(CreateAlbum {
                title: "Lakeside Retreat".to_string(),
                share_enabled: true,
                ..CreateAlbum::default()
            })
            .unwrap();
        let state = SessionState::resolved(
            ShareReference::new(album.id),
            AccessResult::Granted { album },
        );

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["state"], "granted");
        assert_eq!(json["album"]["title"], "Lakeside Retreat");
        assert_eq!(json["album"]["share_enabled"], true);
    }

    #[test]
    fn test_idle_is_bare_tag() {
        let json = serde_json::to_value(&SessionState::Idle).unwrap();
        assert_eq!(json, serde_json::json!({ "state": "idle" }));
    }
}
