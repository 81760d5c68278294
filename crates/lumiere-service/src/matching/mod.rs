//! Simulated selfie search over a shared album.

pub mod scorer;
pub mod service;

pub use scorer::{FixedScorer, MatchScorer, RandomScorer};
pub use service::{FaceMatchService, PhotoMatch};
