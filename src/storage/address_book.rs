//! In-memory address book
//!
//! Records are keyed by name in an insertion-ordered map, so lookups and
//! ordered iteration/pagination read from the same structure.

use indexmap::IndexMap;
use std::fmt;

use crate::models::Record;

/// Collection of contact records keyed by unique name
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name
    ///
    /// Replacing an existing name keeps the original position in the book.
    /// Returns the record that was replaced, if any.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name.as_str().to_string();
        self.records.insert(key, record)
    }

    /// Look up a record by exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for modification
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove a record, keeping the order of the remaining ones
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    /// Iterate records in insertion order. Every call starts from the first record.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records on a 1-based page of `page_size` records
    ///
    /// Pages past the end are empty. Page 0 and a zero page size are also
    /// empty; callers are expected to reject them before asking.
    pub fn paginated_list(&self, page: usize, page_size: usize) -> Vec<&Record> {
        if page == 0 || page_size == 0 {
            return Vec::new();
        }

        let start = (page - 1).saturating_mul(page_size);
        self.records
            .values()
            .skip(start)
            .take(page_size)
            .collect()
    }

    /// Number of pages needed to show every record
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.records.len().div_ceil(page_size)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        let mut record = Record::new(name, None).unwrap();
        record.add_phone("1234567890").unwrap();
        record
    }

    fn book_with(count: usize) -> AddressBook {
        let mut book = AddressBook::new();
        for i in 0..count {
            book.add_record(record(&format!("contact{}", i)));
        }
        book
    }

    fn names<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<String> {
        records
            .into_iter()
            .map(|r| r.name.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        assert!(book.add_record(record("john")).is_none());

        let found = book.find("john").unwrap();
        assert_eq!(found.name.as_str(), "john");
        assert!(book.find("jane").is_none());
        assert!(book.find("John").is_none());
    }

    #[test]
    fn test_overwrite_keeps_single_entry_in_place() {
        let mut book = book_with(3);
        let mut replacement = Record::new("contact0", Some("2000-01-01")).unwrap();
        replacement.add_phone("9999999999").unwrap();

        let previous = book.add_record(replacement).unwrap();
        assert_eq!(previous.first_phone().unwrap().as_str(), "1234567890");

        assert_eq!(book.len(), 3);
        assert_eq!(names(&book), vec!["contact0", "contact1", "contact2"]);
        assert_eq!(
            book.find("contact0").unwrap().first_phone().unwrap().as_str(),
            "9999999999"
        );
    }

    #[test]
    fn test_delete() {
        let mut book = book_with(3);

        let removed = book.delete("contact1").unwrap();
        assert_eq!(removed.name.as_str(), "contact1");
        assert!(book.find("contact1").is_none());
        assert_eq!(names(&book), vec!["contact0", "contact2"]);

        assert!(book.delete("contact1").is_none());
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_find_mut() {
        let mut book = book_with(1);
        book.find_mut("contact0").unwrap().add_phone("5555555555").unwrap();
        assert_eq!(book.find("contact0").unwrap().phones.len(), 2);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let book = book_with(3);
        let first: Vec<_> = names(book.iter());
        let second: Vec<_> = names(book.iter());
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_pagination() {
        let book = book_with(6);

        assert_eq!(
            names(book.paginated_list(1, 5)),
            vec!["contact0", "contact1", "contact2", "contact3", "contact4"]
        );
        assert_eq!(names(book.paginated_list(2, 5)), vec!["contact5"]);
        assert!(book.paginated_list(3, 5).is_empty());
        assert!(book.paginated_list(0, 5).is_empty());
        assert!(book.paginated_list(1, 0).is_empty());
    }

    #[test]
    fn test_pages_concatenate_to_full_book() {
        for count in [0, 1, 4, 5, 6, 10, 13] {
            for page_size in [1, 2, 3, 5, 7] {
                let book = book_with(count);
                let pages = book.page_count(page_size);

                let concatenated: Vec<_> = (1..=pages)
                    .flat_map(|page| book.paginated_list(page, page_size))
                    .collect();

                assert_eq!(names(concatenated), names(&book));
                assert!(book.paginated_list(pages + 1, page_size).is_empty());
            }
        }
    }

    #[test]
    fn test_huge_page_number_is_empty() {
        let book = book_with(2);
        assert!(book.paginated_list(usize::MAX, 5).is_empty());
    }

    #[test]
    fn test_display() {
        let mut book = AddressBook::new();
        assert_eq!(book.to_string(), "");

        book.add_record(record("john"));
        book.add_record(record("jane"));
        assert_eq!(
            book.to_string(),
            "Contact name: john, phones: 1234567890\nContact name: jane, phones: 1234567890"
        );
    }
}
