//! Field capability and the unconstrained name field
//!
//! Every scalar stored on a contact is a field: it exposes its value and a
//! setter that validates before storing.

use std::fmt;

use crate::error::ContactResult;

/// A scalar value wrapper whose setter enforces the field's format
pub trait Field: fmt::Display {
    /// Get the stored value
    fn value(&self) -> &str;

    /// Replace the stored value
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidFormat` if the new value violates the
    /// field's constraint. The stored value is left unchanged in that case.
    fn set(&mut self, value: &str) -> ContactResult<()>;
}

/// A contact's name. Any string is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }

    fn set(&mut self, value: &str) -> ContactResult<()> {
        self.0 = value.to_string();
        Ok(())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_accepts_anything() {
        let mut name = Name::new("john");
        assert_eq!(name.value(), "john");

        name.set("").unwrap();
        assert_eq!(name.value(), "");

        name.set("Mary Ann 2").unwrap();
        assert_eq!(name.to_string(), "Mary Ann 2");
    }
}
