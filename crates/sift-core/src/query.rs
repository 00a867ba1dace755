//! FilterQuery domain model
//!
//! A `FilterQuery` is an immutable, fully-populated snapshot of the active
//! filter constraints plus the sort key. Unset fields carry the empty-string
//! sentinel rather than an Option so downstream comparisons are total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sort order applied after filtering.
///
/// Serialized with the on-disk strings the persisted state uses
/// (`""`, `"price-asc"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "price-asc")]
    PriceAsc,
    #[serde(rename = "price-desc")]
    PriceDesc,
    #[serde(rename = "rating-asc")]
    RatingAsc,
    #[serde(rename = "rating-desc")]
    RatingDesc,
}

#[derive(Debug, Error)]
#[error("Invalid sort key: {0}")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(SortKey::None),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "rating-asc" => Ok(SortKey::RatingAsc),
            "rating-desc" => Ok(SortKey::RatingDesc),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::None => "none",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::RatingAsc => "rating-asc",
            SortKey::RatingDesc => "rating-desc",
        };
        f.write_str(s)
    }
}

/// Composed filter constraints. Field names on the wire match the persisted
/// layout (`price`/`rating` are upper bounds, `sortBy` is the sort key).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    pub brand: String,
    pub category: String,
    #[serde(rename = "price")]
    pub max_price: String,
    #[serde(rename = "rating")]
    pub max_rating: String,
    #[serde(rename = "sortBy")]
    pub sort: SortKey,
}

impl FilterQuery {
    /// Upper price bound: `None` when unconstrained, otherwise the parsed
    /// threshold with lenient coercion (unparsable input reduces to 0).
    pub fn max_price_value(&self) -> Option<f64> {
        threshold(&self.max_price)
    }

    /// Upper rating bound, same coercion rules as [`max_price_value`].
    ///
    /// [`max_price_value`]: FilterQuery::max_price_value
    pub fn max_rating_value(&self) -> Option<f64> {
        threshold(&self.max_rating)
    }
}

// Empty string means "no constraint"; a literal "0" is a real threshold.
// Unparsable text coerces to 0 rather than raising, which keeps the
// pipeline total over arbitrary raw input. Non-finite parses ("inf",
// "nan") count as unparsable: a NaN bound would satisfy no comparison
// and an infinite one would constrain nothing.
fn threshold(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(
        trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .unwrap_or(0.0),
    )
}
