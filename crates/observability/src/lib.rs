//! Logging setup for binaries and tests embedding the engine.

pub mod tracing;

pub use crate::tracing::init;
