//! Photo records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lumiere_core::types::PhotoId;

/// A photo inside an album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Unique photo identifier.
    pub id: PhotoId,
    /// File name, e.g. `IMG_4200.jpg`.
    pub name: String,
    /// Placeholder color shown while the image loads.
    pub color: String,
    /// Size of the original file in bytes.
    pub size_bytes: Option<u64>,
    /// When the photo was uploaded.
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// A photo about to be added to the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPhoto {
    /// File name.
    pub name: String,
    /// Placeholder color.
    pub color: String,
    /// Size of the original file in bytes.
    pub size_bytes: Option<u64>,
    /// When the photo was uploaded.
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl NewPhoto {
    /// A photo with just a name and placeholder color.
    pub fn named(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            ..Self::default()
        }
    }

    /// Attach an id, producing the stored record.
    pub fn into_photo(self, id: PhotoId) -> Photo {
        Photo {
            id,
            name: self.name,
            color: self.color,
            size_bytes: self.size_bytes,
            uploaded_at: self.uploaded_at,
        }
    }
}
