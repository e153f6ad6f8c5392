//! Cart API client.
//!
//! Carts are mutable remote state and are never cached: every screen-level
//! operation refetches, and every mutation pushes the whole cart document
//! back (`PUT /carts/{id}`). The pure snapshot transformations live in
//! [`fairstore_core::reconcile`]; this client only moves documents.

use std::sync::Arc;

use tracing::instrument;

use fairstore_core::{Cart, CartDraft, UserId};

use crate::config::FairstoreConfig;
use crate::error::{Result, StoreError};

use super::decode_response;

/// Client for the cart endpoints.
#[derive(Clone)]
pub struct CartClient {
    inner: Arc<CartClientInner>,
}

struct CartClientInner {
    client: reqwest::Client,
    base_url: url::Url,
}

impl CartClient {
    /// Create a new cart client.
    #[must_use]
    pub fn new(config: &FairstoreConfig) -> Self {
        Self {
            inner: Arc::new(CartClientInner {
                client: config.http_client.clone(),
                base_url: config.api_url.clone(),
            }),
        }
    }

    /// Fetch every cart belonging to `user_id`.
    ///
    /// The API returns a sequence; in practice this deployment uses a
    /// single cart per user but the shape is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not parse.
    #[instrument(skip(self), fields(user_id = %user_id))]
    pub async fn get_user_carts(&self, user_id: UserId) -> Result<Vec<Cart>> {
        let url = self.endpoint(&format!("carts/user/{user_id}"))?;
        let response = self.inner.client.get(url).send().await?;
        decode_response(response).await
    }

    /// Replace a cart wholesale (`PUT /carts/{id}` with the full document).
    ///
    /// This is the only mutation protocol the API offers: no deltas, no
    /// concurrency control. The last writer wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not parse.
    #[instrument(skip(self, cart), fields(cart_id = %cart.id))]
    pub async fn replace_cart(&self, cart: &Cart) -> Result<Cart> {
        let url = self.endpoint(&format!("carts/{}", cart.id))?;
        let response = self.inner.client.put(url).json(cart).send().await?;
        decode_response(response).await
    }

    /// Create a new cart (`POST /carts`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the payload does not parse.
    #[instrument(skip(self, draft), fields(user_id = %draft.user_id))]
    pub async fn create_cart(&self, draft: &CartDraft) -> Result<Cart> {
        let url = self.endpoint("carts")?;
        let response = self.inner.client.post(url).json(draft).send().await?;
        decode_response(response).await
    }

    fn endpoint(&self, path: &str) -> Result<url::Url> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| StoreError::Validation(format!("invalid endpoint path {path}: {e}")))
    }
}
