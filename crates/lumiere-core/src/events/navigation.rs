//! Navigation domain events.

use serde::{Deserialize, Serialize};

/// Events emitted by the screen router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NavigationEvent {
    /// The active role changed.
    RoleSwitched {
        /// The new role.
        role: String,
        /// The screen the role lands on.
        screen: String,
    },
    /// The active screen changed.
    ScreenChanged {
        /// The new screen.
        screen: String,
    },
    /// The router entered shared preview mode.
    SharedPreviewEntered,
    /// The router returned to normal navigation.
    SharedPreviewLeft,
}
