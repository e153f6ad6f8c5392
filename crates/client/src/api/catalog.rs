//! Catalog API client.
//!
//! Fetches the product list and single-product details. Responses are
//! cached in-memory with a fixed TTL (the upstream catalog changes rarely
//! and the API offers no invalidation signal); [`CatalogClient::invalidate_all`]
//! drops the cache explicitly.

use std::sync::Arc;

use moka::future::Cache;
use tracing::{debug, instrument};

use fairstore_core::{Product, ProductId};

use crate::config::FairstoreConfig;
use crate::error::{Result, StoreError};

use super::{decode_optional, decode_response};

/// Cache key for catalog responses.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
enum CacheKey {
    Products,
    Product(ProductId),
}

/// Cached catalog values.
#[derive(Debug, Clone)]
enum CacheValue {
    Products(Arc<Vec<Product>>),
    Product(Arc<Product>),
}

/// Client for the catalog endpoints.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: url::Url,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &FairstoreConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: config.http_client.clone(),
                base_url: config.api_url.clone(),
                cache,
            }),
        }
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not parse.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>> {
        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&CacheKey::Products).await
        {
            debug!("Cache hit for product list");
            return Ok(products.as_ref().clone());
        }

        let url = self.endpoint("products")?;
        let response = self.inner.client.get(url).send().await?;
        let products: Vec<Product> = decode_response(response).await?;

        self.inner
            .cache
            .insert(
                CacheKey::Products,
                CacheValue::Products(Arc::new(products.clone())),
            )
            .await;

        Ok(products)
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the API has no such product (it
    /// answers with an empty body rather than a 404), or an error if the
    /// request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product(&self, product_id: ProductId) -> Result<Product> {
        let key = CacheKey::Product(product_id);
        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&key).await {
            debug!("Cache hit for product");
            return Ok(product.as_ref().clone());
        }

        let url = self.endpoint(&format!("products/{product_id}"))?;
        let response = self.inner.client.get(url).send().await?;
        let product: Product = decode_optional(response)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("product {product_id}")))?;

        self.inner
            .cache
            .insert(key, CacheValue::Product(Arc::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Drop all cached catalog data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }

    fn endpoint(&self, path: &str) -> Result<url::Url> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| StoreError::Validation(format!("invalid endpoint path {path}: {e}")))
    }
}
