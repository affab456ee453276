//! Greeter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the greeter
//! application, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      greeter-cli (Presentation)         │
//! │   (Calls the GreetPort driving port)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (GreetUseCase)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: MessageWriter)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   greeter-adapters (Infrastructure)     │
//! │     (StreamWriter, MemoryWriter)        │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │        (Person, ErrorInfo)              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use greeter_core::prelude::*;
//!
//! let writer = |message: &str, _cancel: &CancellationToken| -> DomainResult<()> {
//!     assert_eq!(message, "Hello, Alice!");
//!     Ok(())
//! };
//!
//! let use_case = GreetUseCase::new(Box::new(writer));
//! let result = use_case.execute(&GreetCommand::new("Alice"), &CancellationToken::new());
//! assert!(result.is_ok());
//! ```

pub mod domain;

pub mod application;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CancellationToken, GreetCommand, GreetUseCase,
        error::{DomainResult, ErrorInfo, ErrorKind, ResultExt},
        ports::{GreetPort, MessageWriter},
    };
    pub use crate::domain::{MAX_NAME_LENGTH, Person};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
