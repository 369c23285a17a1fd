//! User settings for the contact book
//!
//! Manages the preferences that shape a session: page size for listings,
//! the prompt text and the default log filter.

use crate::error::ContactError;

/// Default number of contacts shown per page
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Default prompt printed before each command
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Default tracing filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Session settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Contacts per page for `show all` and `show page`
    pub page_size: usize,

    /// Prompt printed before reading each command
    pub prompt: String,

    /// Tracing filter directive (e.g. "warn", "contact_book=debug")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Override the page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the prompt
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Override the log filter
    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.page_size == 0 {
            return Err(ContactError::Config("page size must be at least 1".into()));
        }

        if self.log_level.trim().is_empty() {
            return Err(ContactError::Config("log level cannot be empty".into()));
        }

        Ok(())
    }
}
