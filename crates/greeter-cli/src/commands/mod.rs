//! Command handlers (presentation layer).
//!
//! Handlers talk to the application only through driving ports and import
//! error types only from `greeter_core::application::error`.

pub mod greet;
