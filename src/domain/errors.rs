//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    InvalidName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Phone number must consist of exactly 10 digits, got: {:?}",
                phone
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
