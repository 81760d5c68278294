//! Host navigation: address-bar history and the screen router.

pub mod history;
pub mod router;

pub use history::NavigationHistory;
pub use router::{ScreenRouter, ViewRouter};
