//! Query executor: deterministic filter -> sort pipeline
//!
//! Pure over its inputs: the caller's collection is never mutated and the
//! same (products, query) pair always yields the same ordered result.

use crate::product::Product;
use crate::query::{FilterQuery, SortKey};

/// Apply `query` to `products`: conjunctive filter predicates, then a
/// stable sort when a sort key is set.
pub fn execute(products: &[Product], query: &FilterQuery) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|product| matches(product, query))
        .cloned()
        .collect();

    // Vec::sort_by is stable, so ties keep their input order.
    match query.sort {
        SortKey::None => {}
        SortKey::PriceAsc => result.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => result.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingAsc => result.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        SortKey::RatingDesc => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    result
}

fn matches(product: &Product, query: &FilterQuery) -> bool {
    if !query.brand.is_empty()
        && !product
            .brand
            .to_lowercase()
            .contains(&query.brand.to_lowercase())
    {
        return false;
    }

    if !query.category.is_empty()
        && !product.category.eq_ignore_ascii_case(&query.category)
    {
        return false;
    }

    if let Some(max_price) = query.max_price_value() {
        if product.price > max_price {
            return false;
        }
    }

    if let Some(max_rating) = query.max_rating_value() {
        if product.rating > max_rating {
            return false;
        }
    }

    true
}
