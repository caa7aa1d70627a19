//! Roof Top Cafe storefront library.
//!
//! Everything the site does in the browser, minus the browser: the
//! persistent cart, the page controllers (theme, menus, search, forms,
//! slider, ...) and the [`app::Storefront`] that wires them to one store and
//! turns page events into effects.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod cart;
pub mod config;
pub mod controllers;
pub mod error;
pub mod storage;
pub mod toast;
