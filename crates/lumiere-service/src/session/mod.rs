//! The viewing session: how a viewer's location maps to shared-album access.

pub mod state;
pub mod viewer;

pub use state::SessionState;
pub use viewer::ViewingSession;
