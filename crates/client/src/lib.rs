//! Fairstore Client - I/O layer for the remote store API.
//!
//! # Architecture
//!
//! - The remote store API is the source of truth - no local database, direct
//!   API calls with whole-document cart replacement
//! - Catalog responses are cached in-memory via `moka` (TTL from config);
//!   carts are never cached
//! - Session state (login token and flag) persists through a small
//!   file-backed key-value store
//!
//! # Modules
//!
//! - [`api`] - `CatalogClient`, `CartClient`, and `AuthClient`
//! - [`session`] - `SessionStore` persistence and the `SessionController`
//! - [`config`] - Environment configuration
//! - [`error`] - The `StoreError` taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use fairstore_client::{FairstoreConfig, api::CatalogClient};
//! use fairstore_core::{CategoryFilter, SortMode, filter_catalog};
//!
//! let config = FairstoreConfig::from_env()?;
//! let catalog = CatalogClient::new(&config);
//!
//! let products = catalog.get_products().await?;
//! let cheap_first = filter_catalog(&products, &CategoryFilter::All, "", SortMode::Ascending);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod session;

pub use config::{ConfigError, FairstoreConfig};
pub use error::{Result, StoreError};
pub use session::{SessionController, SessionStore};
