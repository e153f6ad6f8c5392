//! Catalog browsing commands.

use fairstore_client::api::CatalogClient;
use fairstore_client::{FairstoreConfig, Result};
use fairstore_core::{CategoryFilter, ProductId, SortMode, filter_catalog};

/// Fetch the catalog, apply the filter pipeline, print one line per product.
pub async fn list(
    config: &FairstoreConfig,
    category: &CategoryFilter,
    search: &str,
    sort: SortMode,
) -> Result<()> {
    let catalog = CatalogClient::new(config);
    let products = catalog.get_products().await?;
    let filtered = filter_catalog(&products, category, search, sort);

    if filtered.is_empty() {
        println!("No products match.");
        return Ok(());
    }

    for product in &filtered {
        println!(
            "{:>5}  {:<55}  {:>9}  {}",
            product.id,
            truncate(&product.title, 55),
            format!("${}", product.price),
            product.category
        );
    }
    println!("{} product(s)", filtered.len());
    Ok(())
}

/// Show one product in detail.
pub async fn show(config: &FairstoreConfig, id: ProductId) -> Result<()> {
    let catalog = CatalogClient::new(config);
    let product = catalog.get_product(id).await?;

    println!("{}", product.title);
    println!("  id:       {}", product.id);
    println!("  price:    ${}", product.price);
    println!("  category: {}", product.category);
    if let Some(rating) = product.rating {
        println!("  rating:   {} ({} reviews)", rating.rate, rating.count);
    }
    println!("  image:    {}", product.image);
    println!();
    println!("{}", product.description);
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
