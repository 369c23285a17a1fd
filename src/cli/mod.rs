//! Command-line interaction
//!
//! This module contains the command grammar and the interactive assistant
//! that executes commands against the address book.

pub mod assistant;
pub mod command;

pub use assistant::{Assistant, Reply};
pub use command::Command;
