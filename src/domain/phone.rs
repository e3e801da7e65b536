//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// A phone number is valid when it consists of exactly ten ASCII digits.
/// Validation is purely structural: formatting characters such as spaces,
/// hyphens or a leading `+` are rejected rather than stripped.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(Phone::new("123-456-7890").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is not exactly
    /// ten characters long or contains a non-digit character.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    fn is_valid(phone: &str) -> bool {
        // Byte length equals char count once every byte is an ASCII digit.
        phone.len() == PHONE_DIGITS && phone.bytes().all(|b| b.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Phone {
    fn value(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Phone {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("0987654321").unwrap();
        assert_eq!(phone.as_str(), "0987654321");
        assert_eq!(format!("{}", phone), "0987654321");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("123456789a").is_err());
        assert!(Phone::new("123-456-78").is_err());
        assert!(Phone::new(" 123456789").is_err());
        assert!(Phone::new("+123456789").is_err());
        assert!(Phone::new("1234567890").is_ok());
        assert!(Phone::new("0000000000").is_ok());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not ASCII digits.
        assert!(Phone::new("١٢٣٤٥٦٧٨٩٠").is_err());
        // Fullwidth digits.
        assert!(Phone::new("１２３４５６７８９０").is_err());
    }

    #[test]
    fn test_phone_error_carries_input() {
        let err = Phone::new("555-1234").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("555-1234".to_string()));
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::new("5555555555").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"5555555555\"");
    }

    #[test]
    fn test_phone_deserialization() {
        let phone: Phone = serde_json::from_str("\"5555555555\"").unwrap();
        assert_eq!(phone.as_str(), "5555555555");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"555-1234\"");
        assert!(result.is_err());
    }
}
