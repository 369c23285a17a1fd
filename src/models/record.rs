//! Contact record model
//!
//! A record is one contact: a name, any number of phones (duplicates are
//! allowed) and an optional birthday.

use chrono::{Local, NaiveDate};
use std::fmt;

use super::birthday::Birthday;
use super::field::{Field, Name};
use super::phone::Phone;
use crate::error::{ContactError, ContactResult};

/// A single contact entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Contact name, also the key in the address book
    pub name: Name,

    /// Phone numbers in the order they were added
    pub phones: Vec<Phone>,

    /// Optional birthday
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones
    ///
    /// An empty birthday string is treated as no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidFormat` if a non-empty birthday is malformed.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> ContactResult<Self> {
        let birthday = match birthday {
            Some(value) if !value.is_empty() => Some(Birthday::new(value)?),
            _ => None,
        };

        Ok(Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday,
        })
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Does nothing if absent.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Some(index) = self.phones.iter().position(|p| p.as_str() == phone) {
            self.phones.remove(index);
        }
    }

    /// Replace the first phone equal to `old` with `new`
    ///
    /// # Errors
    ///
    /// - `ContactError::InvalidFormat` if `new` is malformed (nothing changes)
    /// - `ContactError::PhoneNotFound` if no phone equals `old`
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let replacement = Phone::new(new)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or(ContactError::PhoneNotFound)?;

        *slot = replacement;
        Ok(())
    }

    /// Find a phone equal to `phone`
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// The first phone, which commands like `phone` and `change` act on
    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    /// Days until the next birthday, counted from the local date
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(|p| p.value()).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )?;

        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }

        Ok(())
    }
}
