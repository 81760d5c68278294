//! Core traits defined in `lumiere-core` and implemented by other crates.

pub mod event_sink;

pub use event_sink::EventSink;
