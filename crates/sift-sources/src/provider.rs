//! Product provider trait

use async_trait::async_trait;
use sift_core::{FilterQuery, Product};

/// Source of product collections.
///
/// `fetch` receives the active query so a real backend could narrow the
/// response server-side; providers are free to ignore it and return the
/// whole catalog, since the engine runs the query executor over whatever
/// comes back.
#[async_trait]
pub trait ProductProvider: Send + Sync {
    async fn fetch(&self, query: &FilterQuery) -> anyhow::Result<Vec<Product>>;
}
