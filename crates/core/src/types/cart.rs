//! Cart types as stored by the remote store API.
//!
//! The API has no delta protocol: a cart is fetched whole and replaced whole.
//! These types mirror the wire documents (camelCase) exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CartId, ProductId, UserId};

/// One product line in a cart.
///
/// `quantity` below 1 is an invalid state; the reconciliation logic in
/// [`crate::reconcile`] never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Referenced catalog product.
    pub product_id: ProductId,
    /// Units of the product, always >= 1.
    pub quantity: u32,
}

impl CartItem {
    /// Create a cart line.
    #[must_use]
    pub const fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A user's server-side cart document.
///
/// Duplicate `product_id` entries are permitted and preserved; the API does
/// not deduplicate and neither do we.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Server-assigned cart record ID.
    pub id: CartId,
    /// Owning user.
    pub user_id: UserId,
    /// Timestamp recorded by the server when the cart was created.
    pub date: DateTime<Utc>,
    /// Ordered product lines.
    pub products: Vec<CartItem>,
}

impl Cart {
    /// Total number of units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.products.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Body for creating a new cart (`POST /carts`): a cart without a server ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDraft {
    /// Owning user.
    pub user_id: UserId,
    /// Client-side creation timestamp.
    pub date: DateTime<Utc>,
    /// Initial product lines.
    pub products: Vec<CartItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_deserializes_api_payload() {
        // Shape taken verbatim from GET /carts/user/1; `__v` must be ignored.
        let json = r#"{
            "id": 1,
            "userId": 1,
            "date": "2020-03-02T00:00:00.000Z",
            "products": [
                { "productId": 1, "quantity": 4 },
                { "productId": 2, "quantity": 1 }
            ],
            "__v": 0
        }"#;

        let cart: Cart = serde_json::from_str(json).expect("valid payload");
        assert_eq!(cart.id, CartId::new(1));
        assert_eq!(cart.user_id, UserId::new(1));
        assert_eq!(cart.products.len(), 2);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_cart_serializes_camel_case() {
        let cart = Cart {
            id: CartId::new(7),
            user_id: UserId::new(1),
            date: "2024-01-01T00:00:00Z".parse().expect("valid timestamp"),
            products: vec![CartItem::new(ProductId::new(3), 2)],
        };

        let json = serde_json::to_value(&cart).expect("serialize");
        assert_eq!(json["userId"], 1);
        assert_eq!(json["products"][0]["productId"], 3);
        assert_eq!(json["products"][0]["quantity"], 2);
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart {
            id: CartId::new(1),
            user_id: UserId::new(1),
            date: Utc::now(),
            products: vec![],
        };
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }
}
