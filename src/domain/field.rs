//! Shared behaviour of string-backed record fields.

use std::fmt::Display;

/// A string-backed value stored on a contact record.
///
/// Every field renders as exactly the string it was constructed from, so the
/// `Display` output and [`Field::value`] always agree.
pub trait Field: Display {
    /// Get the underlying value.
    fn value(&self) -> &str;

    /// Whether this field holds exactly `raw`.
    fn matches(&self, raw: &str) -> bool {
        self.value() == raw
    }
}
