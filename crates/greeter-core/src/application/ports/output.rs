//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `greeter-adapters` crate provides implementations.

use crate::application::{CancellationToken, error::DomainResult};

/// Port for writing a finished message to an output sink.
///
/// Implemented by:
/// - `greeter_adapters::writer::StreamWriter` (stdout, stderr, files)
/// - `greeter_adapters::writer::MemoryWriter` (testing)
/// - any `Fn(&str, &CancellationToken) -> DomainResult<()>` closure
///
/// ## Contract
///
/// - Check `cancel` before writing; if cancelled, return an
///   `ErrorKind::Infrastructure` error whose message starts with
///   `"write cancelled: "` and write nothing.
/// - Never let a panic escape; convert it to an `ErrorKind::Infrastructure`
///   error.
/// - Accept any message, including the empty string. No length limit.
#[cfg_attr(test, mockall::automock)]
pub trait MessageWriter: Send + Sync {
    fn write(&self, message: &str, cancel: &CancellationToken) -> DomainResult<()>;
}

impl<F> MessageWriter for F
where
    F: Fn(&str, &CancellationToken) -> DomainResult<()> + Send + Sync,
{
    fn write(&self, message: &str, cancel: &CancellationToken) -> DomainResult<()> {
        self(message, cancel)
    }
}
