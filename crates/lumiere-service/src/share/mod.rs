//! Share management: link codec, access policy, and the controller tying
//! them to the album store.

pub mod access;
pub mod controller;
pub mod link;

pub use access::AccessService;
pub use controller::ShareLinkController;
pub use link::LinkService;
