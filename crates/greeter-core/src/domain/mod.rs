// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for greeter.
//!
//! This module contains pure business logic. All I/O is handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or console calls
//! - **No logging**: the domain returns values; callers decide what to log
//! - **Immutable values**: `Person` is never mutated after construction
pub mod error;
pub mod value_objects;

pub use error::{DomainResult, ErrorInfo, ErrorKind, ResultExt};
pub use value_objects::{MAX_NAME_LENGTH, Person};
