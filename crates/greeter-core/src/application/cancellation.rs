//! Cancellation signal threaded from the entry point to the output port.
//!
//! The core never waits on the token; it only hands it to the writer, which
//! checks it before doing I/O.

use std::{
    fmt,
    sync::{Arc, OnceLock},
    time::{Duration, Instant},
};

const DEADLINE_EXCEEDED: &str = "deadline exceeded";

/// Shared cancellation handle.
///
/// Clones observe the same state. The first call to [`cancel`](Self::cancel)
/// fixes the reason; later calls are no-ops.
#[derive(Clone, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    reason: OnceLock<String>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    /// A token that is only cancelled explicitly.
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that also reports cancelled once `deadline` has passed.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            inner: Arc::new(Inner {
                reason: OnceLock::new(),
                deadline: Some(deadline),
            }),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn cancel(&self, reason: impl Into<String>) {
        let _ = self.inner.reason.set(reason.into());
    }

    pub fn is_cancelled(&self) -> bool {
        self.reason().is_some()
    }

    /// Why the token is cancelled, or `None` while it is still active.
    pub fn reason(&self) -> Option<String> {
        if let Some(reason) = self.inner.reason.get() {
            return Some(reason.clone());
        }
        match self.inner.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(DEADLINE_EXCEEDED.to_string()),
            _ => None,
        }
    }
}

impl fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationToken")
            .field("reason", &self.reason())
            .field("deadline", &self.inner.deadline)
            .finish()
    }
}
