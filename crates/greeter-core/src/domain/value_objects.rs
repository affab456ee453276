//! Domain value objects.
//!
//! # Design
//!
//! `Person` is a pure value type: equality-by-value, no identity, no
//! persistence. The only way to obtain one is [`Person::create`], so every
//! instance in the program satisfies the name-length invariant.

use std::fmt;

use crate::domain::error::{DomainResult, ErrorInfo};

/// Upper bound on a person's name, counted in Unicode scalar values.
///
/// Counting `char`s rather than bytes keeps the limit the same for
/// `"Jose"` and `"José"`.
pub const MAX_NAME_LENGTH: usize = 100;

// ── Person ───────────────────────────────────────────────────────────────────

/// A validated person's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
}

impl Person {
    /// Validate `name` and build a `Person`.
    ///
    /// # Errors
    ///
    /// `ErrorKind::Validation` if the name is empty or longer than
    /// [`MAX_NAME_LENGTH`] characters.
    pub fn create(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(ErrorInfo::validation("name cannot be empty"));
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ErrorInfo::validation("name exceeds maximum length"));
        }

        Ok(Self { name })
    }

    /// The name exactly as supplied.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn greeting_message(&self) -> String {
        format!("Hello, {}!", self.name)
    }

    /// Always `true`; construction already enforced the invariant.
    pub fn is_valid(&self) -> bool {
        let len = self.name.chars().count();
        (1..=MAX_NAME_LENGTH).contains(&len)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<&str> for Person {
    type Error = ErrorInfo;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl TryFrom<String> for Person {
    type Error = ErrorInfo;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}
