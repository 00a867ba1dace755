//! Product domain model

use serde::{Deserialize, Serialize};

/// A catalog record. Read-only to the engine; providers own the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub brand: String,
    /// Non-negative.
    pub price: f64,
    /// In the range 0..=5.
    pub rating: f64,
}

impl Product {
    pub fn new(
        id: u64,
        name: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
        rating: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            brand: brand.into(),
            price,
            rating,
        }
    }
}

/// Highest price in a collection, 0 for an empty one.
/// Used to size price-range inputs.
pub fn max_price_of(products: &[Product]) -> f64 {
    products
        .iter()
        .map(|p| p.price)
        .fold(0.0, |acc, price| if price > acc { price } else { acc })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_price_of_empty() {
        assert_eq!(max_price_of(&[]), 0.0);
    }

    #[test]
    fn test_max_price_of_products() {
        let products = vec![
            Product::new(1, "A", "Electronics", "Sony", 99.99, 4.0),
            Product::new(2, "B", "Footwear", "Nike", 149.5, 4.5),
            Product::new(3, "C", "Clothing", "Zara", 29.0, 3.0),
        ];
        assert_eq!(max_price_of(&products), 149.5);
    }
}
