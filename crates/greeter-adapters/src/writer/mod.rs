//! Writer adapters for the `MessageWriter` port.

mod memory;
mod stream;

pub use memory::MemoryWriter;
pub use stream::{AppendFile, StreamWriter};

use greeter_core::application::{CancellationToken, error::ErrorInfo};

/// Shared cancellation check: `Some(error)` if the write must not happen.
fn check_cancelled(cancel: &CancellationToken) -> Option<ErrorInfo> {
    cancel
        .reason()
        .map(|reason| ErrorInfo::infrastructure(format!("write cancelled: {reason}")))
}
