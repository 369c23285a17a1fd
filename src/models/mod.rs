//! Core data models for the contact book
//!
//! This module contains the validated fields (name, phone, birthday) and the
//! contact record built from them.

pub mod birthday;
pub mod field;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use field::{Field, Name};
pub use phone::Phone;
pub use record::Record;
