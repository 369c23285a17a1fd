//! Interactive assistant
//!
//! Owns the address book for a session, executes parsed commands against it
//! and runs the read-eval-print loop over any reader/writer pair.

use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use super::command::Command;
use crate::config::Settings;
use crate::display::{format_added, format_birthday_countdown, format_contact_page};
use crate::error::{ContactError, ContactResult};
use crate::services::ContactService;
use crate::storage::AddressBook;

/// Banner printed once when the loop starts
pub const BANNER: &str = "Bot assistant is running. Type 'exit' to exit.";

/// Outcome of handling one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep going
    Message(String),
    /// Print the message and end the session
    Exit(String),
}

impl Reply {
    /// Text to print for this reply
    pub fn text(&self) -> &str {
        match self {
            Self::Message(text) | Self::Exit(text) => text,
        }
    }

    /// Whether the session should end after this reply
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

/// The contact book assistant
pub struct Assistant {
    book: AddressBook,
    settings: Settings,
    today: Option<NaiveDate>,
}

impl Assistant {
    /// Create an assistant with an empty address book
    pub fn new(settings: Settings) -> Self {
        Self::with_book(AddressBook::new(), settings)
    }

    /// Create an assistant around an existing address book
    pub fn with_book(book: AddressBook, settings: Settings) -> Self {
        Self {
            book,
            settings,
            today: None,
        }
    }

    /// Pin the date used for birthday countdowns
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The session's address book
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// The session's settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Parse and execute one line
    pub fn handle_line(&mut self, line: &str) -> ContactResult<Reply> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    /// Handle one line, turning failures into printable replies
    ///
    /// Usage hints are returned as-is; every other error is rendered as
    /// `Error: <message>`.
    pub fn respond(&mut self, line: &str) -> Reply {
        match self.handle_line(line) {
            Ok(reply) => reply,
            Err(ContactError::BadArguments(hint)) => Reply::Message(hint),
            Err(e) => {
                debug!(error = %e, "Command failed");
                Reply::Message(format!("Error: {}", e))
            }
        }
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: Command) -> ContactResult<Reply> {
        debug!(?command, "Executing command");

        let page_size = self.settings.page_size;
        let today = self.today();
        let mut service = ContactService::new(&mut self.book);

        let message = match command {
            Command::Hello => "How can I help you?".to_string(),

            Command::Add {
                name,
                phone,
                birthday,
            } => {
                let record = service.add(&name, &phone, &birthday)?;
                format_added(record)
            }

            Command::Change { name, phone } => {
                service.change_phone(&name, &phone)?;
                format!("Updated contact: {}, {}", name, phone)
            }

            Command::Phone { name } => {
                let phone = service.first_phone(&name)?;
                format!("Phone number for {}: {}", name, phone)
            }

            Command::Delete { name } => {
                service.delete(&name)?;
                format!("Deleted contact: {}", name)
            }

            Command::Birthday { name } => {
                let days = service.days_to_birthday(&name, today)?;
                format_birthday_countdown(&name, days)
            }

            Command::ShowAll => {
                if service.is_empty() {
                    "No users found".to_string()
                } else {
                    format_contact_page(&service.page(1, page_size))
                }
            }

            Command::ShowPage(page) => format_contact_page(&service.page(page, page_size)),

            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };

        Ok(Reply::Message(message))
    }

    /// Run the read-eval-print loop until an exit command or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> ContactResult<()> {
        writeln!(output, "{}", BANNER)?;
        info!(page_size = self.settings.page_size, "Session started");

        loop {
            write!(output, "{}", self.settings.prompt)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                info!("End of input, closing session");
                return Ok(());
            }

            let reply = self.respond(&line);
            writeln!(output, "{}", reply.text())?;

            if reply.is_exit() {
                info!(contacts = self.book.len(), "Session closed");
                return Ok(());
            }
        }
    }
}
