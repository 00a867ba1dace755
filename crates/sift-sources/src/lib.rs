//! Product data providers for sift
//!
//! The engine only sees the [`ProductProvider`] trait; the bundled
//! [`CatalogProvider`] serves an in-memory list with configurable latency,
//! standing in for a real backend.

pub mod catalog;
pub mod provider;

pub use catalog::{CatalogProvider, demo_catalog};
pub use provider::ProductProvider;
