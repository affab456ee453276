//! In-memory writer adapter for testing.

use std::sync::{Arc, PoisonError, RwLock};

use greeter_core::application::{CancellationToken, MessageWriter, error::DomainResult};

use super::check_cancelled;

/// In-memory writer for testing.
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to the use case.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    lines: Arc<RwLock<Vec<String>>>,
}

impl MemoryWriter {
    /// Create a new empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every message written so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The output as a console would show it: one line per message.
    pub fn contents(&self) -> String {
        self.lines().iter().map(|l| format!("{l}\n")).collect()
    }

    /// Number of successful writes.
    pub fn write_count(&self) -> usize {
        self.lines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl MessageWriter for MemoryWriter {
    fn write(&self, message: &str, cancel: &CancellationToken) -> DomainResult<()> {
        if let Some(err) = check_cancelled(cancel) {
            return Err(err);
        }

        self.lines
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        Ok(())
    }
}
