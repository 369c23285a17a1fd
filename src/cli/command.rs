//! Command definitions for the assistant
//!
//! Parses one line of user input into a typed command. Matching is
//! case-insensitive; a verb that takes arguments must be followed by a
//! space, and the arguments are split on whitespace.

use crate::error::{ContactError, ContactResult};

/// Usage hint for `add` with the wrong number of arguments
pub const ADD_USAGE: &str = "Give me name, phone, and birthday (if applicable)";

/// Usage hint for bare `add`/`change` and malformed `change`
pub const NAME_AND_PHONE_USAGE: &str = "Give me name and phone please";

/// Usage hint for commands that take a single name
pub const NAME_USAGE: &str = "Give me name please";

/// Reply for a page number that is not a positive integer
pub const INVALID_PAGE: &str = "Invalid page number.";

/// Inputs that end the session
pub const EXIT_COMMANDS: &[&str] = &["good bye", "close", "exit"];

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greeting
    Hello,
    /// Create a contact with one phone and a birthday
    Add {
        name: String,
        phone: String,
        birthday: String,
    },
    /// Replace a contact's first phone
    Change { name: String, phone: String },
    /// Show a contact's first phone
    Phone { name: String },
    /// Remove a contact
    Delete { name: String },
    /// Days until a contact's next birthday
    Birthday { name: String },
    /// First page of contacts
    ShowAll,
    /// A 1-based page of contacts
    ShowPage(usize),
    /// End the session
    Exit,
}

impl Command {
    /// Parse a line of input
    ///
    /// # Errors
    ///
    /// - `ContactError::BadArguments` with a usage hint when a known verb has
    ///   the wrong arguments
    /// - `ContactError::UnknownCommand` for anything else
    pub fn parse(line: &str) -> ContactResult<Self> {
        let line = line.trim_end_matches(['\r', '\n']).to_lowercase();
        let line = line.as_str();

        if line == "hello" {
            return Ok(Self::Hello);
        }
        if EXIT_COMMANDS.contains(&line) {
            return Ok(Self::Exit);
        }
        if line == "show all" {
            return Ok(Self::ShowAll);
        }
        if let Some(page) = line.strip_prefix("show page ") {
            return parse_page(page).map(Self::ShowPage);
        }

        if let Some(rest) = line.strip_prefix("add ") {
            return match rest.split_whitespace().collect::<Vec<_>>().as_slice() {
                [name, phone, birthday] => Ok(Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    birthday: birthday.to_string(),
                }),
                _ => Err(usage(ADD_USAGE)),
            };
        }
        if let Some(rest) = line.strip_prefix("change ") {
            return match rest.split_whitespace().collect::<Vec<_>>().as_slice() {
                [name, phone] => Ok(Self::Change {
                    name: name.to_string(),
                    phone: phone.to_string(),
                }),
                _ => Err(usage(NAME_AND_PHONE_USAGE)),
            };
        }
        if let Some(rest) = line.strip_prefix("phone ") {
            return required_name(rest).map(|name| Self::Phone { name });
        }
        if let Some(rest) = line.strip_prefix("delete ") {
            return required_name(rest).map(|name| Self::Delete { name });
        }
        if let Some(rest) = line.strip_prefix("birthday ") {
            return required_name(rest).map(|name| Self::Birthday { name });
        }

        match line {
            "add" | "change" => Err(usage(NAME_AND_PHONE_USAGE)),
            "phone" | "delete" | "birthday" => Err(usage(NAME_USAGE)),
            _ => Err(ContactError::UnknownCommand),
        }
    }
}

fn usage(message: &str) -> ContactError {
    ContactError::BadArguments(message.to_string())
}

fn required_name(rest: &str) -> ContactResult<String> {
    let rest = rest.trim();
    if rest.is_empty() {
        Err(usage(NAME_USAGE))
    } else {
        Ok(rest.to_string())
    }
}

fn parse_page(input: &str) -> ContactResult<usize> {
    match input.trim().parse::<usize>() {
        Ok(page) if page > 0 => Ok(page),
        _ => Err(usage(INVALID_PAGE)),
    }
}
