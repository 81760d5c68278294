//! Share access control: decides what a share reference grants.

use tracing::debug;

use lumiere_entity::share::{AccessResult, ShareReference};

use crate::album::AlbumStore;

/// Resolves share references against the album store.
#[derive(Debug, Clone, Default)]
pub struct AccessService;

impl AccessService {
    /// Creates a new access service.
    pub fn new() -> Self {
        Self
    }

    /// Looks the referenced album up and applies the sharing flag.
    ///
    /// The result depends only on the reference and the store's current
    /// contents; nothing is cached between calls.
    pub fn resolve_access(&self, reference: &ShareReference, store: &dyn AlbumStore) -> AccessResult {
        let result = match store.find(reference.album_id) {
            None => AccessResult::NotFound {
                album_id: reference.album_id,
            },
            Some(album) if !album.share_enabled => AccessResult::Forbidden {
                album_id: album.id,
                title: album.title.clone(),
            },
            Some(album) => AccessResult::Granted { album },
        };

        debug!(album_id = %reference.album_id, outcome = ?result.outcome(), "Share reference resolved");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumiere_core::types::AlbumId;
    use lumiere_entity::album::{CreateAlbum, UpdateAlbum};

    use crate::album::InMemoryAlbumStore;

    #[test]
    fn test_resolve_follows_sharing_flag() {
        let mut store = InMemoryAlbumStore::new();
        let album = store
            .create(CreateAlbum {
                title: "Anderson Wedding".to_string(),
                share_enabled: true,
                ..CreateAlbum::default()
            })
            .unwrap();
        let access = AccessService::new();
        let reference = ShareReference::new(album.id);

        assert!(access.resolve_access(&reference, &store).is_granted());

        store.update(album.id, &UpdateAlbum::sharing(false)).unwrap();
        assert_eq!(
            access.resolve_access(&reference, &store),
            AccessResult::Forbidden {
                album_id: album.id,
                title: "Anderson Wedding".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_absent_album() {
        let store = InMemoryAlbumStore::new();
        let reference = ShareReference::new(AlbumId::new(999).unwrap());
        assert_eq!(
            AccessService::new().resolve_access(&reference, &store),
            AccessResult::NotFound {
                album_id: AlbumId::new(999).unwrap()
            }
        );
    }
}
