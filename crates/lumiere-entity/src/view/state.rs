//! Externally observable view state.

use serde::{Deserialize, Serialize};

use super::screen::Screen;
use crate::share::AccessResult;

/// Whether the router shows normal navigation or a shared album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ViewMode {
    /// Role-based navigation.
    Normal,
    /// Viewing an album through a share reference.
    SharedPreview {
        /// The resolved reference, which may be forbidden or not found.
        access: AccessResult,
    },
}

/// Current screen crossed with the view mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// The active screen under normal navigation.
    pub screen: Screen,
    /// The view mode.
    pub mode: ViewMode,
}

impl ViewState {
    /// Whether a shared album is being shown.
    pub fn is_shared_preview(&self) -> bool {
        matches!(self.mode, ViewMode::SharedPreview { .. })
    }
}
