//! Display formatting for terminal output
//!
//! Provides utilities for formatting contacts for the assistant's replies.

pub mod contact;

pub use contact::{format_added, format_birthday_countdown, format_contact_page};
