//! Record model representing one contact in the address book.

use crate::domain::{Field, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name plus an ordered list of phone numbers.
///
/// The name is fixed at construction. Phone numbers keep the order they were
/// added in and may contain duplicates. Lookups by raw string compare
/// against the stored value exactly and act on the first match only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name (also the address book key)
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a new record with no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create a new record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    /// The contact name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Validate `phone` and append it. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `phone` is not ten digits.
    /// The record is left unchanged in that case.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        tracing::debug!("Adding phone {} to {}", phone, self.name);
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// Returns the removed phone, or `None` if the record has no such number.
    /// A miss is not an error and leaves the record untouched.
    pub fn remove_phone(&mut self, phone: &str) -> Option<Phone> {
        let idx = self.position(phone)?;
        let removed = self.phones.remove(idx);
        tracing::debug!("Removed phone {} from {}", removed, self.name);
        Some(removed)
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// Returns `Ok(true)` if a phone was replaced and `Ok(false)` if `old`
    /// was not found. `new` is only validated once `old` has been found, so a
    /// miss succeeds even when `new` is malformed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `old` was found and `new`
    /// is not ten digits. The existing phone is kept in that case.
    pub fn edit_phone(
        &mut self,
        old: &str,
        new: impl Into<String>,
    ) -> Result<bool, ValidationError> {
        let Some(idx) = self.position(old) else {
            return Ok(false);
        };

        let replacement = Phone::new(new)?;
        tracing::debug!("Editing phone {} -> {} for {}", old, replacement, self.name);
        self.phones[idx] = replacement;
        Ok(true)
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.matches(phone))
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.matches(phone))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
