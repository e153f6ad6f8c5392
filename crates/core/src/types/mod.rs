//! Core types for fairstore.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod product;

pub use cart::{Cart, CartDraft, CartItem};
pub use id::*;
pub use product::{Category, CategoryFilter, Product, Rating};
