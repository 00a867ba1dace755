//! In-memory catalog provider

use async_trait::async_trait;
use sift_core::{FilterQuery, Product};
use std::time::Duration;
use tokio::time::sleep;

use crate::provider::ProductProvider;

/// Serves a fixed product list after a simulated network delay.
pub struct CatalogProvider {
    products: Vec<Product>,
    latency: Duration,
    failure: Option<String>,
}

impl CatalogProvider {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            latency: Duration::from_millis(1000),
            failure: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every fetch fail with the given message. Failure-injection
    /// hook for tests.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }
}

#[async_trait]
impl ProductProvider for CatalogProvider {
    async fn fetch(&self, _query: &FilterQuery) -> anyhow::Result<Vec<Product>> {
        sleep(self.latency).await;
        if let Some(message) = &self.failure {
            anyhow::bail!("{message}");
        }
        Ok(self.products.clone())
    }
}

/// The bundled demo catalog: 24 products across the three demo categories.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Wireless Headphones", "Electronics", "Sony", 199.99, 4.8),
        Product::new(2, "Smart TV 55\"", "Electronics", "Samsung", 649.0, 4.5),
        Product::new(3, "Laptop 14\"", "Electronics", "Dell", 899.0, 4.2),
        Product::new(4, "Smartphone", "Electronics", "Apple", 999.0, 4.7),
        Product::new(5, "Bluetooth Speaker", "Electronics", "JBL", 79.99, 4.3),
        Product::new(6, "Soundbar", "Electronics", "Bose", 299.0, 4.6),
        Product::new(7, "Monitor 27\"", "Electronics", "LG", 249.5, 4.1),
        Product::new(8, "Tablet", "Electronics", "Samsung", 329.0, 4.0),
        Product::new(9, "Running Shoes", "Footwear", "Nike", 120.0, 4.6),
        Product::new(10, "Trail Sneakers", "Footwear", "Adidas", 95.0, 4.2),
        Product::new(11, "Court Classics", "Footwear", "Puma", 70.0, 3.9),
        Product::new(12, "Walking Shoes", "Footwear", "New Balance", 85.5, 4.4),
        Product::new(13, "Racing Flats", "Footwear", "Asics", 110.0, 4.3),
        Product::new(14, "Canvas Slip-ons", "Footwear", "Vans", 55.0, 4.0),
        Product::new(15, "Leather Boots", "Footwear", "Timberland", 180.0, 4.5),
        Product::new(16, "Gym Trainers", "Footwear", "Reebok", 65.0, 3.8),
        Product::new(17, "Denim Jacket", "Clothing", "Levi's", 89.99, 4.4),
        Product::new(18, "Cotton Hoodie", "Clothing", "Nike", 60.0, 4.1),
        Product::new(19, "Linen Shirt", "Clothing", "Zara", 39.9, 3.7),
        Product::new(20, "Wool Sweater", "Clothing", "Uniqlo", 49.9, 4.2),
        Product::new(21, "Rain Shell", "Clothing", "Patagonia", 149.0, 4.7),
        Product::new(22, "Chino Trousers", "Clothing", "Gap", 44.95, 3.9),
        Product::new(23, "Track Pants", "Clothing", "Adidas", 54.99, 4.0),
        Product::new(24, "Puffer Vest", "Clothing", "H&M", 34.99, 3.6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_returns_full_catalog() {
        let provider = CatalogProvider::new(demo_catalog());
        let result = provider.fetch(&FilterQuery::default()).await.unwrap();
        assert_eq!(result.len(), 24);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_ignores_query_narrowing() {
        let provider =
            CatalogProvider::new(demo_catalog()).with_latency(Duration::from_millis(5));
        let query = FilterQuery {
            category: "Footwear".to_string(),
            ..Default::default()
        };
        // Narrowing is the executor's job; the provider returns everything.
        let result = provider.fetch(&query).await.unwrap();
        assert_eq!(result.len(), 24);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_provider_rejects() {
        let provider = CatalogProvider::new(demo_catalog()).failing("backend down");
        let err = provider.fetch(&FilterQuery::default()).await.unwrap_err();
        assert!(err.to_string().contains("backend down"));
    }

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = demo_catalog();
        assert_eq!(catalog.len(), 24);
        for product in &catalog {
            assert!(product.price >= 0.0);
            assert!((0.0..=5.0).contains(&product.rating));
            assert!(
                ["Electronics", "Footwear", "Clothing"].contains(&product.category.as_str())
            );
        }
        // Ids are unique.
        let mut ids: Vec<u64> = catalog.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }
}
