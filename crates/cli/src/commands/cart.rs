//! Cart commands.
//!
//! Mutations follow the upstream protocol: fetch the user's carts, apply
//! the pure snapshot transformation, push every changed cart back whole.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;

use fairstore_client::api::{CartClient, CatalogClient};
use fairstore_client::{FairstoreConfig, Result, StoreError};
use fairstore_core::{Cart, CartDraft, CartItem, Product, ProductId, remove_item, set_quantity as reconcile_quantity};

/// Show the cart(s) with product details and totals.
pub async fn show(config: &FairstoreConfig) -> Result<()> {
    let cart_client = CartClient::new(config);
    let catalog = CatalogClient::new(config);

    let carts = cart_client.get_user_carts(config.user_id).await?;
    if carts.iter().all(Cart::is_empty) {
        println!("Your cart is empty.");
        return Ok(());
    }

    // One detail fetch per distinct product across all carts.
    let mut details: HashMap<ProductId, Product> = HashMap::new();
    for cart in &carts {
        for item in &cart.products {
            if !details.contains_key(&item.product_id) {
                let product = catalog.get_product(item.product_id).await?;
                details.insert(item.product_id, product);
            }
        }
    }

    let mut total = Decimal::ZERO;
    for cart in &carts {
        if cart.is_empty() {
            continue;
        }
        println!("Cart {} ({})", cart.id, cart.date.format("%Y-%m-%d"));
        for item in &cart.products {
            let line = details.get(&item.product_id).map_or_else(
                || format!("product {}", item.product_id),
                |p| p.title.clone(),
            );
            let price = details
                .get(&item.product_id)
                .map_or(Decimal::ZERO, |p| p.price);
            let subtotal = price * Decimal::from(item.quantity);
            total += subtotal;
            println!("  {:>3} x {:<55} {:>9}", item.quantity, line, format!("${subtotal}"));
        }
    }
    println!("Total: ${total}");
    Ok(())
}

/// Add a product by creating a new cart record upstream (the API's
/// add-to-cart is a `POST /carts`, not an append).
///
/// # Errors
///
/// Returns [`StoreError::Validation`] without issuing a request when
/// `quantity` is 0; cart lines always carry at least one unit.
pub async fn add(config: &FairstoreConfig, product_id: ProductId, quantity: u32) -> Result<()> {
    if quantity < 1 {
        return Err(StoreError::Validation(
            "quantity must be at least 1".to_string(),
        ));
    }
    let cart_client = CartClient::new(config);

    let draft = CartDraft {
        user_id: config.user_id,
        date: Utc::now(),
        products: vec![CartItem::new(product_id, quantity)],
    };
    let created = cart_client.create_cart(&draft).await?;
    println!(
        "Added product {product_id} (x{quantity}) to cart {}.",
        created.id
    );
    Ok(())
}

/// Remove every line for a product from every cart that carries it.
pub async fn remove(config: &FairstoreConfig, product_id: ProductId) -> Result<()> {
    let cart_client = CartClient::new(config);

    let carts = cart_client.get_user_carts(config.user_id).await?;
    let mut changed = 0;
    for cart in &carts {
        let next = remove_item(cart, product_id);
        if next != *cart {
            cart_client.replace_cart(&next).await?;
            changed += 1;
        }
    }

    if changed == 0 {
        println!("Product {product_id} is not in the cart.");
    } else {
        println!("Removed product {product_id} from {changed} cart(s).");
    }
    Ok(())
}

/// Set the quantity on every matching line. Quantities below 1 are floored:
/// the cart is left untouched, matching the decrement-from-1 no-op.
pub async fn set_quantity(
    config: &FairstoreConfig,
    product_id: ProductId,
    quantity: u32,
) -> Result<()> {
    let cart_client = CartClient::new(config);

    let carts = cart_client.get_user_carts(config.user_id).await?;
    let mut changed = 0;
    for cart in &carts {
        let next = reconcile_quantity(cart, product_id, quantity);
        if next != *cart {
            cart_client.replace_cart(&next).await?;
            changed += 1;
        }
    }

    if changed == 0 {
        println!("No change.");
    } else {
        println!("Set product {product_id} to quantity {quantity} in {changed} cart(s).");
    }
    Ok(())
}

/// Checkout stub: the upstream API has no checkout endpoint, so this only
/// confirms, mirroring the source application's behavior.
pub async fn checkout(config: &FairstoreConfig) -> Result<()> {
    let cart_client = CartClient::new(config);
    let carts = cart_client.get_user_carts(config.user_id).await?;
    let units: u64 = carts.iter().map(Cart::total_quantity).sum();

    if units == 0 {
        println!("Your cart is empty.");
    } else {
        println!("Checkout complete ({units} unit(s)).");
    }
    Ok(())
}
