//! Core types for Roof Top Cafe.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod price;
pub mod theme;

pub use cart::{CartLineItem, Product};
pub use email::{Email, EmailError};
pub use price::Rupiah;
pub use theme::Theme;
