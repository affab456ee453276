//! Application layer for greeter.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`GreetUseCase`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Commands**: Input DTOs crossing the presentation boundary
//! - **Errors**: Re-export façade over the domain error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod cancellation;
pub mod command;
pub mod error;
pub mod ports;
pub mod services;

pub use cancellation::CancellationToken;
pub use command::GreetCommand;
pub use services::GreetUseCase;

// Re-export port traits (for adapter implementation)
pub use ports::{GreetPort, MessageWriter};
