//! Core domain models and logic for sift
//!
//! This crate contains:
//! - Domain models (Product, FilterQuery, SortKey)
//! - Query executor (deterministic filter -> sort pipeline)
//! - Paginator (fixed-size page windows over a result set)

pub mod exec;
pub mod page;
pub mod product;
pub mod query;

pub use exec::execute;
pub use page::{DEFAULT_PAGE_SIZE, Paginator};
pub use product::{Product, max_price_of};
pub use query::{FilterQuery, SortKey};
