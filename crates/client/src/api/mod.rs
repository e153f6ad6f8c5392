//! HTTP clients for the remote store API.
//!
//! One client per API surface, all sharing the same response handling:
//!
//! - [`CatalogClient`] - product list and detail (`GET /products`)
//! - [`CartClient`] - cart fetch and whole-document replacement (`/carts`)
//! - [`AuthClient`] - credentialed login (`POST /auth/login`)
//!
//! There is no retry policy and no request timeout beyond the transport
//! defaults; a failed request surfaces once as a [`StoreError`].

mod auth;
mod cart;
mod catalog;

pub use auth::AuthClient;
pub use cart::CartClient;
pub use catalog::CatalogClient;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, StoreError};

/// Error body the API sends on non-success statuses.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

/// Decode a response, mapping non-success statuses to [`StoreError::Api`].
///
/// The server-supplied `message` field is surfaced verbatim when present;
/// otherwise a generic message carries the status.
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let text = read_success_body(response).await?;
    serde_json::from_str(&text).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %text.chars().take(500).collect::<String>(),
            "Failed to parse store API response"
        );
        StoreError::Parse(e)
    })
}

/// Like [`decode_response`], but tolerates the API's "empty or `null` body"
/// convention for missing resources.
async fn decode_optional<T: DeserializeOwned>(response: reqwest::Response) -> Result<Option<T>> {
    let text = read_success_body(response).await?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(&text).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %text.chars().take(500).collect::<String>(),
            "Failed to parse store API response"
        );
        StoreError::Parse(e)
    })
}

/// Read the body, turning non-success statuses into [`StoreError::Api`].
async fn read_success_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        tracing::error!(
            status = %status,
            body = %text.chars().take(500).collect::<String>(),
            "Store API returned non-success status"
        );
        let message = serde_json::from_str::<ApiMessage>(&text)
            .map(|m| m.message)
            .unwrap_or_else(|_| format!("request failed with HTTP {status}"));
        return Err(StoreError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(text)
}
