//! Storage layer for sift
//!
//! This crate provides the persisted filter state: a single JSON file
//! acting as a small key-value store, with the active filter query under
//! the `"filters"` key. Reads are lenient (anything broken normalizes to
//! absent); writes report their errors and let the caller decide.

pub mod error;
pub mod store;

pub use error::{Result, StorageError};
pub use store::FilterStore;
