//! Roof Top Cafe Core - Shared types library.
//!
//! This crate provides the domain types used across all Roof Top Cafe components:
//! - `storefront` - Cart manager, UI controllers and application bootstrap
//! - `cli` - Command-line adapter that drives the storefront against a file store
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no storage
//! access, no timers. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Prices in rupiah, emails, themes and cart line items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
