//! Album storage: the store trait, its in-memory implementation, and demo data.

pub mod memory;
pub mod sample;
pub mod store;

pub use memory::InMemoryAlbumStore;
pub use store::AlbumStore;
