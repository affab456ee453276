// ============================================================================
// domain/error.rs - ERROR TAXONOMY
// ============================================================================

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Closed set of failure kinds.
///
/// Every failure in the pipeline is one of these two; there is no catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Invalid input (empty or over-length name). Recoverable by the caller
    /// supplying different input.
    Validation,

    /// Failure in an output sink: I/O error, cancellation, or a panic caught
    /// at the adapter boundary.
    Infrastructure,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error detail carried by the `Err` track of [`DomainResult`].
///
/// The message is user-facing: it must never contain secrets.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Infrastructure, message)
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_infrastructure(&self) -> bool {
        self.kind == ErrorKind::Infrastructure
    }
}

/// Result type used across every stage of the pipeline.
pub type DomainResult<T> = Result<T, ErrorInfo>;

/// Checked accessors for [`DomainResult`].
///
/// Reading the wrong track is a programming error and panics; there is no
/// defaulting.
pub trait ResultExt<T> {
    /// The success value. Panics on the `Err` track.
    fn value(&self) -> &T;

    /// The error detail. Panics on the `Ok` track.
    fn error_info(&self) -> &ErrorInfo;
}

impl<T> ResultExt<T> for DomainResult<T> {
    #[track_caller]
    fn value(&self) -> &T {
        match self {
            Ok(value) => value,
            Err(info) => panic!("value() called on an error result: {} ({})", info, info.kind),
        }
    }

    #[track_caller]
    fn error_info(&self) -> &ErrorInfo {
        match self {
            Ok(_) => panic!("error_info() called on an ok result"),
            Err(info) => info,
        }
    }
}
