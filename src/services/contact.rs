//! Contact service
//!
//! Provides business logic for contact management on top of the address
//! book: validated creation, first-phone edits, lookups and paging.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{ContactError, ContactResult};
use crate::models::{Phone, Record};
use crate::storage::AddressBook;

/// Service for contact management
pub struct ContactService<'a> {
    book: &'a mut AddressBook,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(book: &'a mut AddressBook) -> Self {
        Self { book }
    }

    /// Create a contact with one phone and a birthday
    ///
    /// Both the phone and the birthday are validated before the book is
    /// touched, so a rejected contact leaves no partial record behind.
    /// An existing contact with the same name is replaced.
    pub fn add(&mut self, name: &str, phone: &str, birthday: &str) -> ContactResult<&Record> {
        let mut record = Record::new(name, Some(birthday))?;
        record.add_phone(phone)?;

        if self.book.add_record(record).is_some() {
            info!(contact = name, "Replaced existing contact");
        } else {
            info!(contact = name, "Added contact");
        }

        self.get(name)
    }

    /// Get a contact by name
    pub fn get(&self, name: &str) -> ContactResult<&Record> {
        self.book
            .find(name)
            .ok_or_else(|| ContactError::contact_not_found(name))
    }

    /// Replace a contact's first phone
    ///
    /// A contact without phones gets `phone` as its first one.
    pub fn change_phone(&mut self, name: &str, phone: &str) -> ContactResult<&Record> {
        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| ContactError::contact_not_found(name))?;

        match record.first_phone().map(|p| p.as_str().to_string()) {
            Some(old) => {
                record.edit_phone(&old, phone)?;
                debug!(contact = name, old = %old, new = phone, "Changed first phone");
            }
            None => {
                record.add_phone(phone)?;
                debug!(contact = name, new = phone, "Contact had no phones, added one");
            }
        }

        self.get(name)
    }

    /// Get a contact's first phone
    pub fn first_phone(&self, name: &str) -> ContactResult<&Phone> {
        self.get(name)?
            .first_phone()
            .ok_or_else(|| ContactError::NoPhones(name.to_string()))
    }

    /// Delete a contact
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        let removed = self
            .book
            .delete(name)
            .ok_or_else(|| ContactError::contact_not_found(name))?;

        info!(contact = name, "Deleted contact");
        Ok(removed)
    }

    /// Days from `today` until a contact's next birthday
    ///
    /// `Ok(None)` means the contact has no birthday set.
    pub fn days_to_birthday(&self, name: &str, today: NaiveDate) -> ContactResult<Option<i64>> {
        Ok(self.get(name)?.days_to_birthday_from(today))
    }

    /// Contacts on a 1-based page
    pub fn page(&self, page: usize, page_size: usize) -> Vec<&Record> {
        let records = self.book.paginated_list(page, page_size);
        debug!(page, page_size, found = records.len(), "Listed page");
        records
    }

    /// Whether the book has no contacts
    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }
}
