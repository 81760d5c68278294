//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use lumiere_core::AppError;

use super::screen::Screen;

/// Roles a visitor can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Platform administrator.
    Admin,
    /// Photographer managing albums.
    Photographer,
    /// Guest looking for their photos.
    Guest,
}

impl UserRole {
    /// All roles, in switcher order.
    pub const ALL: [UserRole; 3] = [Self::Admin, Self::Photographer, Self::Guest];

    /// Screens reachable from this role's navigation, first one is the landing screen.
    pub fn nav_items(&self) -> &'static [Screen] {
        match self {
            Self::Admin => &[Screen::AdminDashboard, Screen::PhotographerDashboard],
            Self::Photographer => &[Screen::PhotographerDashboard, Screen::AlbumDetail],
            Self::Guest => &[Screen::GuestGallery],
        }
    }

    /// The screen the role lands on after switching to it.
    pub fn default_screen(&self) -> Screen {
        self.nav_items()[0]
    }

    /// Whether the role's navigation lists the screen.
    pub fn can_view(&self, screen: Screen) -> bool {
        self.nav_items().contains(&screen)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Administrator",
            Self::Photographer => "Photographer",
            Self::Guest => "Guest",
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Photographer => "photographer",
            Self::Guest => "guest",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "photographer" | "customer" => Ok(Self::Photographer),
            "guest" | "enduser" => Ok(Self::Guest),
            _ => Err(AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, photographer, guest"
            ))),
        }
    }
}
