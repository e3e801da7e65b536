//! Data models for address book entities.
//!
//! This module contains [`Record`], the per-contact structure holding a
//! validated name and its phone numbers.

pub mod record;

pub use record::Record;
