//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact
//! record: the contact name and its phone numbers. These value objects
//! validate at construction time, so an invalid name or phone number can
//! never be represented in an address book.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
