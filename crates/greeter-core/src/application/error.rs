//! Application-facing error types.
//!
//! Outer layers (adapters, presentation) import error types from here and
//! never from `crate::domain` directly. The types are the domain's own; this
//! module only re-exports them.

pub use crate::domain::error::{DomainResult, ErrorInfo, ErrorKind, ResultExt};
