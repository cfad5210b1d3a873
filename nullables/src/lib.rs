//! Nullable infrastructure for deterministic testing.
//!
//! The only external dependency of the codec with observable nondeterminism is
//! the random source. This crate provides a test-friendly implementation that
//! returns scripted bytes and never touches the operating system.

pub mod random;

pub use random::NullEntropy;
