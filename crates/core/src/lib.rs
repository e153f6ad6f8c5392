//! Fairstore Core - Shared types and pure logic.
//!
//! This crate provides the domain model and business logic used across all
//! fairstore components:
//! - `client` - HTTP clients for the remote store API plus local session state
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no persistence. Everything here is deterministic and testable
//! without a network or a UI harness.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the Product/Cart/Session data model
//! - [`filter`] - Catalog filtering: category, title search, price sort
//! - [`reconcile`] - Cart snapshot transformations (remove item, set quantity)
//! - [`session`] - Session state and the Auth/Authenticated navigation machine

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod filter;
pub mod reconcile;
pub mod session;
pub mod types;

pub use filter::{SortMode, filter_catalog};
pub use reconcile::{remove_item, set_quantity};
pub use session::{NavState, Session};
pub use types::*;
