//! Custom error types for the contact book
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for contact book operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A phone number or birthday failed its format check
    #[error("{0}")]
    InvalidFormat(String),

    /// Entity not found errors
    #[error("{entity_type} '{identifier}' not found.")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Phone lookup miss while editing a record
    #[error("Phone number not found")]
    PhoneNotFound,

    /// The contact exists but has no phone numbers stored
    #[error("Contact '{0}' has no phone numbers.")]
    NoPhones(String),

    /// The input line did not match any known command
    #[error("Unknown command.")]
    UnknownCommand,

    /// Wrong number of arguments; the message is a usage hint
    #[error("{0}")]
    BadArguments(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Console I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ContactError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: name.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::PhoneNotFound)
    }

    /// Check if this is a format validation error
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat(_))
    }

    /// Usage hints are shown to the user verbatim rather than as errors
    pub fn is_usage_hint(&self) -> bool {
        matches!(self, Self::BadArguments(_))
    }
}

impl From<std::io::Error> for ContactError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for contact book operations
pub type ContactResult<T> = Result<T, ContactError>;
