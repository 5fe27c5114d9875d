//! # Storage Module
//!
//! Persists the novena collection to a flat JSON file.
//!
//! The domain layer only sees the [`NovenaStorage`] trait. The whole
//! collection is loaded once at startup and rewritten in full after every
//! mutation, so the cost of a save grows with the number of novenas and
//! donations. That is acceptable for the small collections this serves.

pub mod error;
pub mod json;
pub mod traits;

#[cfg(test)]
pub mod test_utils;

pub use error::StorageError;
pub use json::{JsonConnection, NovenaRepository};
pub use traits::{Connection, NovenaStorage, StoredNovenas};
