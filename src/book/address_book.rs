//! Name-keyed collection of contact records.
//!
//! [`AddressBook`] wraps an insertion-ordered map from contact name to
//! [`Record`] and exposes only the operations an address book needs. Lookups
//! are exact string matches on the name; no case folding or trimming is done.

use crate::models::Record;
use indexmap::map::{self, Entry};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An in-memory address book.
///
/// Each name maps to at most one record. Adding a record whose name is
/// already present replaces the stored record in place, so iteration order
/// reflects when a name was first added.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut john = Record::new("John").unwrap();
/// john.add_phone("1234567890").unwrap();
/// book.add_record(john);
///
/// let john = book.find_mut("John").unwrap();
/// john.edit_phone("1234567890", "1112223333").unwrap();
///
/// assert_eq!(
///     book.find("John").unwrap().to_string(),
///     "Contact name: John, phones: 1112223333"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name, replacing any record with the same name.
    ///
    /// Returns a mutable reference to the stored record so the caller can
    /// keep editing it after handing it to the book.
    pub fn add_record(&mut self, record: Record) -> &mut Record {
        let key = record.name().as_str().to_string();
        match self.records.entry(key) {
            Entry::Occupied(mut entry) => {
                tracing::debug!("Replacing record: {}", entry.key());
                entry.insert(record);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                tracing::debug!("Adding record: {}", entry.key());
                entry.insert(record)
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// Returns the removed record, or `None` if there was none. The remaining
    /// records keep their relative order.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            tracing::debug!("Deleted record: {}", name);
        }
        removed
    }

    /// Iterate over `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Iterator over the entries of an [`AddressBook`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: map::Iter<'a, String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, record)| (name.as_str(), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Serde support - serialize as a list of records in insertion order
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.records.values())
    }
}

// Serde support - rebuild the name index from the list of records
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        Ok(book)
    }
}
