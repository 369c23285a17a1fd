//! Contact display formatting
//!
//! Formats records and pages of records for terminal output.

use crate::models::Record;

/// Reply when a page has no contacts on it
pub const EMPTY_PAGE: &str = "No contacts found on this page.";

/// Format a page of records, one per line
pub fn format_contact_page(records: &[&Record]) -> String {
    if records.is_empty() {
        return EMPTY_PAGE.to_string();
    }

    records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Confirmation line for a newly added contact
pub fn format_added(record: &Record) -> String {
    let phone = record.first_phone().map(|p| p.as_str()).unwrap_or_default();
    let mut output = format!("Added contact: {}, {}", record.name, phone);
    if let Some(birthday) = &record.birthday {
        output.push_str(&format!(", Birthday: {}", birthday));
    }
    output
}

/// Describe how far away a contact's birthday is
pub fn format_birthday_countdown(name: &str, days: Option<i64>) -> String {
    match days {
        None => format!("No birthday set for {}", name),
        Some(0) => format!("{}'s birthday is today!", name),
        Some(1) => format!("1 day until {}'s birthday", name),
        Some(days) => format!("{} days until {}'s birthday", days, name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        let mut record = Record::new(name, Some("1990-05-01")).unwrap();
        record.add_phone("1234567890").unwrap();
        record
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(format_contact_page(&[]), "No contacts found on this page.");
    }

    #[test]
    fn test_page_lines() {
        let john = record("john");
        let jane = record("jane");
        let output = format_contact_page(&[&john, &jane]);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Contact name: john, phones: 1234567890, Birthday: 1990-05-01"
        );
        assert!(lines[1].starts_with("Contact name: jane"));
    }

    #[test]
    fn test_added_confirmation() {
        assert_eq!(
            format_added(&record("john")),
            "Added contact: john, 1234567890, Birthday: 1990-05-01"
        );
    }

    #[test]
    fn test_birthday_countdown() {
        assert_eq!(format_birthday_countdown("john", None), "No birthday set for john");
        assert_eq!(format_birthday_countdown("john", Some(0)), "john's birthday is today!");
        assert_eq!(format_birthday_countdown("john", Some(1)), "1 day until john's birthday");
        assert_eq!(
            format_birthday_countdown("john", Some(42)),
            "42 days until john's birthday"
        );
    }
}
