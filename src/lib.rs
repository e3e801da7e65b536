//! Address Book - an in-memory contact store with validated fields.
//!
//! Contacts are kept as [`Record`]s, each holding a non-empty [`Name`] and an
//! ordered list of ten-digit [`Phone`] numbers. An [`AddressBook`] maps names
//! to records. Invalid names and phone numbers are rejected when they are
//! constructed, while lookups that miss simply return `None`.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) and their errors
//! - **models**: The contact `Record`
//! - **book**: The `AddressBook` container
//! - **error**: Infrastructure error types
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//!
//! let mut john = Record::new("John").unwrap();
//! john.add_phone("1234567890").unwrap();
//! john.add_phone("5555555555").unwrap();
//! book.add_record(john);
//!
//! let john = book.find("John").unwrap();
//! assert_eq!(
//!     john.to_string(),
//!     "Contact name: John, phones: 1234567890; 5555555555"
//! );
//! assert!(john.find_phone("0000000000").is_none());
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::AddressBook;
pub use config::{Config, OutputFormat};
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{ConfigError, ConfigResult};
pub use models::Record;
