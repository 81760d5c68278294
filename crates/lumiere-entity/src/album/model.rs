//! Album entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lumiere_core::types::AlbumId;

use super::photo::{NewPhoto, Photo};

/// Presentational status label of an album.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlbumStatus {
    /// Shared with guests.
    Active,
    /// Not shared.
    Draft,
    /// Marked expired by the photographer.
    Expired,
}

impl AlbumStatus {
    /// The status implied by a sharing flag.
    pub fn for_sharing(share_enabled: bool) -> Self {
        if share_enabled {
            Self::Active
        } else {
            Self::Draft
        }
    }

    /// Return the status as its display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Expired => "Expired",
        }
    }
}

impl fmt::Display for AlbumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named collection of photos with a sharing flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    /// Unique album identifier, assigned at creation.
    pub id: AlbumId,
    /// Album title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Whether holders of a share reference may view the photos.
    pub share_enabled: bool,
    /// Presentational status label.
    pub status: AlbumStatus,
    /// Photos in display order.
    pub photos: Vec<Photo>,
    /// When the album was created.
    pub created_at: DateTime<Utc>,
}

impl Album {
    /// Number of photos in the album.
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }
}

/// Data required to create a new album.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAlbum {
    /// Album title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Initial sharing flag.
    pub share_enabled: bool,
    /// Initial photos; ids are assigned by the store.
    pub photos: Vec<NewPhoto>,
}

/// A partial update to an album. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAlbum {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New sharing flag.
    pub share_enabled: Option<bool>,
    /// New status label.
    pub status: Option<AlbumStatus>,
}

impl UpdateAlbum {
    /// The update that turns sharing on or off.
    pub fn sharing(enabled: bool) -> Self {
        Self {
            share_enabled: Some(enabled),
            status: Some(AlbumStatus::for_sharing(enabled)),
            ..Self::default()
        }
    }

    /// Apply the update in place.
    pub fn apply(&self, album: &mut Album) {
        if let Some(ref title) = self.title {
            album.title = title.clone();
        }
        if let Some(ref description) = self.description {
            album.description = description.clone();
        }
        if let Some(share_enabled) = self.share_enabled {
            album.share_enabled = share_enabled;
        }
        if let Some(status) = self.status {
            album.status = status;
        }
    }
}
