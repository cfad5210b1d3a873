//! Shared utilities for the mnemo workspace.

pub mod logging;

pub use logging::{init_tracing, LogFormat};
