//! Birthday field
//!
//! Stores the birthday exactly as entered (`YYYY-MM-DD`) alongside the parsed
//! calendar date, so the countdown to the next birthday can use month and day.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use super::field::Field;
use crate::error::{ContactError, ContactResult};

/// Accepted birthday format
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

const INVALID_BIRTHDAY: &str = "Invalid birthday date format. Use YYYY-MM-DD format.";

/// A validated birthday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new birthday from a `YYYY-MM-DD` string
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidFormat` if the value is not a valid
    /// calendar date in that format.
    pub fn new(value: impl Into<String>) -> ContactResult<Self> {
        let value = value.into();
        let date = Self::parse(&value)?;
        Ok(Self { value, date })
    }

    fn parse(value: &str) -> ContactResult<NaiveDate> {
        // chrono's %Y also takes signed, short or space-padded years
        if !has_four_digit_year(value) {
            return Err(ContactError::InvalidFormat(INVALID_BIRTHDAY.into()));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map_err(|_| ContactError::InvalidFormat(INVALID_BIRTHDAY.into()))
    }

    /// Get the parsed date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Date on which this birthday is celebrated in the given year
    ///
    /// 29 February falls back to 28 February in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// Days from `today` until the next occurrence of this birthday.
    /// Returns 0 when the birthday is today.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        let mut next = self.occurrence_in(today.year())?;
        if next < today {
            next = self.occurrence_in(today.year() + 1)?;
        }
        Some((next - today).num_days())
    }
}

fn has_four_digit_year(value: &str) -> bool {
    match value.as_bytes() {
        [y0, y1, y2, y3, b'-', ..] => [y0, y1, y2, y3].iter().all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

impl Field for Birthday {
    fn value(&self) -> &str {
        &self.value
    }

    fn set(&mut self, value: &str) -> ContactResult<()> {
        self.date = Self::parse(value)?;
        self.value = value.to_string();
        Ok(())
    }
}

impl FromStr for Birthday {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
