//! # lumiere-entity
//!
//! Domain models for Lumiere. Albums and photos are owned by the album
//! store; share references and access results are value objects produced
//! by the share services; view types describe what the router shows.

pub mod album;
pub mod share;
pub mod view;
