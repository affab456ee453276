//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "greet a person".

pub mod greet_service;

pub use greet_service::GreetUseCase;
