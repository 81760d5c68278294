//! Core type definitions used across the Lumiere workspace.

pub mod id;

pub use id::*;
