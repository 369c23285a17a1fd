//! Contact Book - interactive command-line contact assistant
//!
//! This library provides the core functionality for a small contact book:
//! validated contact fields, an insertion-ordered address book with
//! pagination, and a line-oriented command interpreter.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Session settings (page size, prompt, log filter)
//! - `error`: Custom error types
//! - `models`: Validated fields and the contact record
//! - `storage`: The in-memory address book
//! - `services`: Business logic layer
//! - `display`: Reply formatting
//! - `cli`: Command grammar and the interactive assistant
//!
//! # Example
//!
//! ```
//! use contact_book::cli::Assistant;
//! use contact_book::config::Settings;
//!
//! let mut assistant = Assistant::new(Settings::default());
//! let reply = assistant.respond("add john 1234567890 1990-05-01");
//! assert_eq!(reply.text(), "Added contact: john, 1234567890, Birthday: 1990-05-01");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ContactError, ContactResult};
