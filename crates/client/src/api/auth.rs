//! Auth API client.
//!
//! One endpoint: `POST /auth/login` with `{username, password}`, answering
//! `{token}` on success. Empty credentials are rejected locally before any
//! network traffic.

use std::sync::Arc;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::FairstoreConfig;
use crate::error::{Result, StoreError};

use super::decode_response;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

/// Client for the auth endpoint.
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<AuthClientInner>,
}

struct AuthClientInner {
    client: reqwest::Client,
    base_url: url::Url,
}

impl AuthClient {
    /// Create a new auth client.
    #[must_use]
    pub fn new(config: &FairstoreConfig) -> Self {
        Self {
            inner: Arc::new(AuthClientInner {
                client: config.http_client.clone(),
                base_url: config.api_url.clone(),
            }),
        }
    }

    /// Exchange credentials for an opaque login token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] without issuing a request when
    /// either field is empty; [`StoreError::Api`] with the server's
    /// `message` on rejected credentials; transport errors otherwise.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<SecretString> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(StoreError::Validation(
                "username and password are required".to_string(),
            ));
        }

        let url = self
            .inner
            .base_url
            .join("auth/login")
            .map_err(|e| StoreError::Validation(format!("invalid endpoint path: {e}")))?;

        let response = self
            .inner
            .client
            .post(url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        let login: LoginResponse = decode_response(response).await?;
        Ok(SecretString::from(login.token))
    }
}
