//! Published engine state

use sift_core::{FilterQuery, Paginator, Product};

/// One page of results plus the navigation affordances for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<Product>,
    /// Current page, 1-based.
    pub page: usize,
    pub page_count: usize,
    /// Total items across all pages.
    pub total: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageView {
    pub(crate) fn of(paginator: &Paginator<Product>) -> Self {
        Self {
            items: paginator.current_slice().to_vec(),
            page: paginator.page(),
            page_count: paginator.page_count(),
            total: paginator.total(),
            has_next: paginator.has_next(),
            has_previous: paginator.has_previous(),
        }
    }
}

/// Immutable view of the engine, published on every visible change.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSnapshot {
    /// The latest composed query (post-debounce for debounced fields).
    pub query: FilterQuery,
    /// True from fetch dispatch until the latest fetch resolves or fails.
    pub loading: bool,
    /// Human-readable message from the most recent failed fetch, cleared
    /// by the next successful one.
    pub error: Option<String>,
    pub page: PageView,
}
