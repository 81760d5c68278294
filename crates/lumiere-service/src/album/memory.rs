//! In-memory album store.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use lumiere_core::error::AppError;
use lumiere_core::result::AppResult;
use lumiere_core::types::{AlbumId, PhotoId};
use lumiere_entity::album::{Album, AlbumStatus, CreateAlbum, UpdateAlbum};

use super::store::AlbumStore;

/// Process-local album store backed by an ordered map.
///
/// Album and photo ids come from monotonic counters starting at 1 and are
/// never reused, even after a delete.
#[derive(Debug, Clone)]
pub struct InMemoryAlbumStore {
    /// Albums keyed by id; id order is creation order.
    albums: BTreeMap<AlbumId, Arc<Album>>,
    /// Id handed to the next created album.
    next_album_id: Option<AlbumId>,
    /// Id handed to the next stored photo.
    next_photo_id: Option<PhotoId>,
}

impl InMemoryAlbumStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            albums: BTreeMap::new(),
            next_album_id: AlbumId::new(1),
            next_photo_id: PhotoId::new(1),
        }
    }

    /// Number of albums currently stored.
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    /// Whether the store holds no albums.
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    fn take_album_id(&mut self) -> AppResult<AlbumId> {
        let id = self
            .next_album_id
            .ok_or_else(|| AppError::internal("Album id space exhausted"))?;
        self.next_album_id = id.next();
        Ok(id)
    }

    fn take_photo_id(&mut self) -> AppResult<PhotoId> {
        let id = self
            .next_photo_id
            .ok_or_else(|| AppError::internal("Photo id space exhausted"))?;
        self.next_photo_id = id.next();
        Ok(id)
    }
}

impl Default for InMemoryAlbumStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AlbumStore for InMemoryAlbumStore {
    fn find(&self, id: AlbumId) -> Option<Arc<Album>> {
        self.albums.get(&id).cloned()
    }

    fn list(&self) -> Vec<Arc<Album>> {
        self.albums.values().cloned().collect()
    }

    fn create(&mut self, album: CreateAlbum) -> AppResult<Arc<Album>> {
        let id = self.take_album_id()?;
        let mut photos = Vec::with_capacity(album.photos.len());
        for photo in album.photos {
            photos.push(photo.into_photo(self.take_photo_id()?));
        }

        let album = Arc::new(Album {
            id,
            title: album.title,
            description: album.description,
            share_enabled: album.share_enabled,
            status: AlbumStatus::for_sharing(album.share_enabled),
            photos,
            created_at: Utc::now(),
        });
        self.albums.insert(id, Arc::clone(&album));

        info!(album_id = %id, title = %album.title, photos = album.photo_count(), "Album created");
        Ok(album)
    }

    fn update(&mut self, id: AlbumId, update: &UpdateAlbum) -> AppResult<Arc<Album>> {
        let current = self
            .albums
            .get(&id)
            .ok_or_else(|| AppError::not_found(format!("Album {id} not found")))?;

        let mut next = Album::clone(current);
        update.apply(&mut next);
        if next == **current {
            debug!(album_id = %id, "Album update changed nothing");
            return Ok(Arc::clone(current));
        }

        let next = Arc::new(next);
        self.albums.insert(id, Arc::clone(&next));
        debug!(album_id = %id, share_enabled = next.share_enabled, status = %next.status, "Album updated");
        Ok(next)
    }

    fn delete(&mut self, id: AlbumId) -> AppResult<Arc<Album>> {
        let removed = self
            .albums
            .remove(&id)
            .ok_or_else(|| AppError::not_found(format!("Album {id} not found")))?;
        info!(album_id = %id, "Album deleted");
        Ok(removed)
    }
}
