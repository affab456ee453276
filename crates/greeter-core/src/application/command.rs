//! Input DTOs for the application layer.

/// Raw, unvalidated input for the greet use case.
///
/// Validation happens inside the use case; holding a `GreetCommand` says
/// nothing about whether the name is acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetCommand {
    name: String,
}

impl GreetCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
