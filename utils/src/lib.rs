//! Shared utilities for the zkid workspace.

pub mod logging;

pub use logging::{init_logging, LogFormat};
