//! Catalog product types as returned by the remote store API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A product from the remote catalog.
///
/// Immutable once fetched; the API returns the full document on both the
/// list and detail endpoints, so one type covers both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog product ID.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price in the store currency. Decimal to avoid float drift.
    pub price: Decimal,
    /// Long-form description.
    pub description: String,
    /// Catalog category.
    pub category: Category,
    /// Product image URL.
    pub image: String,
    /// Aggregate review rating; not present on every payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Aggregate review rating attached to a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating value (e.g., 3.9).
    pub rate: f64,
    /// Number of reviews behind the average.
    pub count: i64,
}

/// Catalog category.
///
/// The remote API models categories as free strings; the four known values
/// get their own variants (note the API's own spelling of "jewelery") and
/// anything else round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Jewelery,
    MensClothing,
    WomensClothing,
    Other(String),
}

impl Category {
    /// The category's wire string, exactly as the API spells it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Electronics => "electronics",
            Self::Jewelery => "jewelery",
            Self::MensClothing => "men's clothing",
            Self::WomensClothing => "women's clothing",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        match s {
            "electronics" => Self::Electronics,
            "jewelery" => Self::Jewelery,
            "men's clothing" => Self::MensClothing,
            "women's clothing" => Self::WomensClothing,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Category selector for catalog filtering: everything, or one category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Only products in exactly this category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == category,
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Ok(Self::Only(Category::from(s)))
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(category) => f.write_str(category.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_roundtrip() {
        for wire in ["electronics", "jewelery", "men's clothing", "women's clothing"] {
            let category = Category::from(wire);
            assert!(!matches!(category, Category::Other(_)), "{wire} is a known category");
            assert_eq!(category.as_str(), wire);
        }

        let odd = Category::from("garden tools");
        assert_eq!(odd, Category::Other("garden tools".to_string()));
        assert_eq!(odd.as_str(), "garden tools");
    }

    #[test]
    fn test_category_filter_matches() {
        let filter = CategoryFilter::Only(Category::Electronics);
        assert!(filter.matches(&Category::Electronics));
        assert!(!filter.matches(&Category::Jewelery));
        assert!(CategoryFilter::All.matches(&Category::Jewelery));
    }

    #[test]
    fn test_category_filter_parse() {
        let all: CategoryFilter = "All".parse().expect("infallible");
        assert_eq!(all, CategoryFilter::All);

        let only: CategoryFilter = "men's clothing".parse().expect("infallible");
        assert_eq!(only, CategoryFilter::Only(Category::MensClothing));
    }

    #[test]
    fn test_product_deserializes_api_payload() {
        // Shape taken verbatim from the remote catalog endpoint.
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).expect("valid payload");
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.category, Category::MensClothing);
        assert_eq!(product.price.to_string(), "109.95");
        assert_eq!(product.rating.map(|r| r.count), Some(120));
    }

    #[test]
    fn test_product_rating_is_optional() {
        let json = r#"{
            "id": 2,
            "title": "Plain Shirt",
            "price": 10,
            "description": "",
            "category": "men's clothing",
            "image": "https://example.com/shirt.jpg"
        }"#;

        let product: Product = serde_json::from_str(json).expect("valid payload");
        assert!(product.rating.is_none());
    }
}
