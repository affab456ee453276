//! Infrastructure adapters for greeter.
//!
//! This crate implements the ports defined in `greeter-core::application::ports`.
//! It contains all I/O. Every adapter is an error boundary: I/O failures,
//! cancellation, and panics leave it only as `ErrorKind::Infrastructure`.

pub mod writer;

// Re-export commonly used adapters
pub use writer::{MemoryWriter, StreamWriter};
