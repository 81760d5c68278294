//! Share domain value objects.

pub mod access;
pub mod reference;

pub use access::AccessResult;
pub use reference::{ShareReference, ALBUM_PARAM};
