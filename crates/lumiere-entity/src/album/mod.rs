//! Album domain entities.

pub mod model;
pub mod photo;

pub use model::{Album, AlbumStatus, CreateAlbum, UpdateAlbum};
pub use photo::{NewPhoto, Photo};
