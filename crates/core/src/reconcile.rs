//! Cart Reconciliation Logic.
//!
//! Pure transformations from one cart snapshot to the next. The caller owns
//! pushing the resulting snapshot upstream (the API replaces carts whole);
//! nothing here performs I/O.
//!
//! Duplicate `product_id` lines are deliberately not deduplicated: both
//! operations act uniformly on every matching line. The remote store permits
//! duplicates and the upstream behavior treats them as a unit.

use crate::types::{Cart, CartItem, ProductId};

/// Drop every line matching `product_id` from the cart.
///
/// No-op if the product is not in the cart. Cart metadata and all other
/// lines are untouched.
#[must_use]
pub fn remove_item(cart: &Cart, product_id: ProductId) -> Cart {
    Cart {
        products: cart
            .products
            .iter()
            .filter(|item| item.product_id != product_id)
            .copied()
            .collect(),
        ..cart.clone()
    }
}

/// Replace the quantity on every line matching `product_id`.
///
/// Quantities are floored at 1: a `new_quantity` below 1 leaves the cart
/// unchanged, so decrementing from 1 is a no-op rather than a removal.
#[must_use]
pub fn set_quantity(cart: &Cart, product_id: ProductId, new_quantity: u32) -> Cart {
    if new_quantity < 1 {
        return cart.clone();
    }

    Cart {
        products: cart
            .products
            .iter()
            .map(|item| {
                if item.product_id == product_id {
                    CartItem {
                        quantity: new_quantity,
                        ..*item
                    }
                } else {
                    *item
                }
            })
            .collect(),
        ..cart.clone()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::{CartId, UserId};

    fn cart(lines: &[(i32, u32)]) -> Cart {
        Cart {
            id: CartId::new(7),
            user_id: UserId::new(1),
            date: Utc::now(),
            products: lines
                .iter()
                .map(|&(id, quantity)| CartItem::new(ProductId::new(id), quantity))
                .collect(),
        }
    }

    #[test]
    fn test_remove_item_drops_only_matches() {
        let before = cart(&[(1, 2), (2, 1), (3, 5)]);
        let after = remove_item(&before, ProductId::new(2));

        assert_eq!(after.id, before.id);
        assert_eq!(after.user_id, before.user_id);
        assert_eq!(after.date, before.date);
        let ids: Vec<i32> = after.products.iter().map(|i| i.product_id.as_i32()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_item_absent_is_noop() {
        let before = cart(&[(1, 2)]);
        let after = remove_item(&before, ProductId::new(99));
        assert_eq!(after, before);
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let before = cart(&[(1, 2), (2, 1)]);
        let once = remove_item(&before, ProductId::new(1));
        let twice = remove_item(&once, ProductId::new(1));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_item_removes_all_duplicates() {
        let before = cart(&[(1, 2), (2, 1), (1, 4)]);
        let after = remove_item(&before, ProductId::new(1));
        let ids: Vec<i32> = after.products.iter().map(|i| i.product_id.as_i32()).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_set_quantity_replaces_matching_line() {
        let before = cart(&[(1, 2), (2, 1)]);
        let after = set_quantity(&before, ProductId::new(1), 5);
        assert_eq!(
            after.products,
            vec![
                CartItem::new(ProductId::new(1), 5),
                CartItem::new(ProductId::new(2), 1),
            ]
        );
    }

    #[test]
    fn test_set_quantity_zero_is_rejected() {
        let before = cart(&[(1, 2)]);
        let after = set_quantity(&before, ProductId::new(1), 0);
        assert_eq!(after, before);
    }

    #[test]
    fn test_quantity_never_drops_below_one() {
        // Set to 1, then attempt 0; quantity stays 1.
        let start = cart(&[(1, 2)]);
        let at_one = set_quantity(&start, ProductId::new(1), 1);
        let floored = set_quantity(&at_one, ProductId::new(1), 0);
        assert_eq!(
            floored.products,
            vec![CartItem::new(ProductId::new(1), 1)]
        );
    }

    #[test]
    fn test_set_quantity_updates_all_duplicates_equally() {
        let before = cart(&[(1, 2), (1, 7), (2, 1)]);
        let after = set_quantity(&before, ProductId::new(1), 3);
        assert_eq!(
            after.products,
            vec![
                CartItem::new(ProductId::new(1), 3),
                CartItem::new(ProductId::new(1), 3),
                CartItem::new(ProductId::new(2), 1),
            ]
        );
    }

    #[test]
    fn test_set_quantity_preserves_order() {
        let before = cart(&[(3, 1), (1, 1), (2, 1)]);
        let after = set_quantity(&before, ProductId::new(1), 9);
        let ids: Vec<i32> = after.products.iter().map(|i| i.product_id.as_i32()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
