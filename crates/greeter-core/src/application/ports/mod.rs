//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces between the
//! application and the outside world.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `MessageWriter`: writes a finished message to some sink
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `GreetPort`: the greet use case as seen by the CLI

pub mod input;
pub mod output;

pub use input::GreetPort;
pub use output::MessageWriter;
