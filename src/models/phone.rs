//! Phone number field
//!
//! A phone number is exactly ten ASCII digits with no formatting characters.

use std::fmt;
use std::str::FromStr;

use super::field::Field;
use crate::error::{ContactError, ContactResult};

/// Number of digits a phone number must have
pub const PHONE_LENGTH: usize = 10;

const INVALID_PHONE: &str = "Invalid phone number format";

/// A validated ten-digit phone number
///
/// # Example
///
/// ```
/// use contact_book::models::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(Phone::new("123-456-7890").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new phone number, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidFormat` unless the value is exactly ten
    /// ASCII digits.
    pub fn new(phone: impl Into<String>) -> ContactResult<Self> {
        let phone = phone.into();
        Self::validate(&phone)?;
        Ok(Self(phone))
    }

    /// Check a candidate phone number without constructing one
    pub fn is_valid(phone: &str) -> bool {
        phone.len() == PHONE_LENGTH && phone.bytes().all(|b| b.is_ascii_digit())
    }

    fn validate(phone: &str) -> ContactResult<()> {
        if Self::is_valid(phone) {
            Ok(())
        } else {
            Err(ContactError::InvalidFormat(INVALID_PHONE.into()))
        }
    }

    /// Get the phone number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Phone {
    fn value(&self) -> &str {
        &self.0
    }

    fn set(&mut self, value: &str) -> ContactResult<()> {
        Self::validate(value)?;
        self.0 = value.to_string();
        Ok(())
    }
}

impl FromStr for Phone {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
