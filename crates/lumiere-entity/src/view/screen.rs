//! Screens of the application.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The screens a role can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// The photographer's album grid.
    PhotographerDashboard,
    /// Editing a single album.
    AlbumDetail,
    /// The guest's selfie search and matched photos.
    GuestGallery,
    /// Platform-wide statistics.
    AdminDashboard,
}

impl Screen {
    /// Return the screen as a kebab-case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhotographerDashboard => "photographer-dashboard",
            Self::AlbumDetail => "album-detail",
            Self::GuestGallery => "guest-gallery",
            Self::AdminDashboard => "admin-dashboard",
        }
    }

    /// Navigation label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PhotographerDashboard => "My Albums",
            Self::AlbumDetail => "Album Detail",
            Self::GuestGallery => "My Photos",
            Self::AdminDashboard => "Dashboard",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
