//! Share reference value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use lumiere_core::types::AlbumId;

/// Name of the query parameter carrying a share reference.
pub const ALBUM_PARAM: &str = "album";

/// The externally held token naming the album a viewer asks for.
///
/// A reference is nothing more than the album id; it is not persisted
/// and carries no secret. Whether it grants access is decided when it is
/// resolved against the album store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareReference {
    /// The referenced album.
    pub album_id: AlbumId,
}

impl ShareReference {
    /// Reference the given album.
    pub fn new(album_id: AlbumId) -> Self {
        Self { album_id }
    }

    /// The query parameter value encoding this reference.
    pub fn param_value(&self) -> String {
        self.album_id.to_string()
    }
}

impl fmt::Display for ShareReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ALBUM_PARAM}={}", self.album_id)
    }
}

impl From<AlbumId> for ShareReference {
    fn from(album_id: AlbumId) -> Self {
        Self::new(album_id)
    }
}
