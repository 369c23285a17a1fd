//! Storage layer for the contact book
//!
//! Contacts live in memory for the lifetime of the process.

pub mod address_book;

pub use address_book::AddressBook;
