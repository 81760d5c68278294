//! Album store trait.

use std::sync::Arc;

use lumiere_core::result::AppResult;
use lumiere_core::types::AlbumId;
use lumiere_entity::album::{Album, CreateAlbum, UpdateAlbum};

/// Keyed collection of albums with copy-on-write updates.
///
/// Albums are handed out as shared snapshots; an update replaces the
/// stored snapshot and never mutates one a reader already holds.
pub trait AlbumStore {
    /// Find an album by id.
    fn find(&self, id: AlbumId) -> Option<Arc<Album>>;

    /// All albums in creation order.
    fn list(&self) -> Vec<Arc<Album>>;

    /// Create an album, assigning it the next id.
    fn create(&mut self, album: CreateAlbum) -> AppResult<Arc<Album>>;

    /// Apply a partial update. Fails with `NotFound` if the album is absent.
    fn update(&mut self, id: AlbumId, update: &UpdateAlbum) -> AppResult<Arc<Album>>;

    /// Remove an album. Fails with `NotFound` if the album is absent.
    fn delete(&mut self, id: AlbumId) -> AppResult<Arc<Album>>;

    /// Albums whose title contains `query`, ignoring case.
    fn search(&self, query: &str) -> Vec<Arc<Album>> {
        let needle = query.trim().to_lowercase();
        self.list()
            .into_iter()
            .filter(|album| album.title.to_lowercase().contains(&needle))
            .collect()
    }
}
