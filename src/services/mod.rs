//! Business logic layer
//!
//! Services sit between the command interpreter and the address book.

pub mod contact;

pub use contact::ContactService;
