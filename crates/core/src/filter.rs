//! Catalog Filter Engine.
//!
//! Pure, total filtering over an in-memory product list: category first,
//! then case-insensitive title search, then price sort. Same inputs always
//! produce the same output; the input slice is never mutated.

use crate::types::{CategoryFilter, Product};

/// Price sort applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Preserve the order the catalog returned.
    #[default]
    None,
    /// Cheapest first.
    Ascending,
    /// Most expensive first.
    Descending,
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(format!("invalid sort mode: {other} (expected none, asc, or desc)")),
        }
    }
}

/// Apply category filter, title search, and price sort to a product list.
///
/// - `category`: identity for [`CategoryFilter::All`], exact match otherwise.
/// - `search`: case-insensitive substring match against the title; identity
///   when empty.
/// - `sort`: stable, so equal-priced products keep their catalog order.
#[must_use]
pub fn filter_catalog(
    products: &[Product],
    category: &CategoryFilter,
    search: &str,
    sort: SortMode,
) -> Vec<Product> {
    let needle = search.to_lowercase();

    let mut results: Vec<Product> = products
        .iter()
        .filter(|product| category.matches(&product.category))
        .filter(|product| needle.is_empty() || product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    match sort {
        SortMode::None => {}
        SortMode::Ascending => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SortMode::Descending => results.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    results
}
