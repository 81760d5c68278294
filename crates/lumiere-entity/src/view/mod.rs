//! View and navigation types.

pub mod role;
pub mod screen;
pub mod state;

pub use role::UserRole;
pub use screen::Screen;
pub use state::{ViewMode, ViewState};
