//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! rooftop cart add "Robusta Lampung" 38000
//! rooftop cart decrement "Robusta Lampung"
//! rooftop cart set "Robusta Lampung" 3
//! rooftop cart show
//! rooftop cart checkout
//! ```

use std::sync::Arc;

use rooftop_core::{Product, Rupiah};
use rooftop_storefront::cart::{
    CartManager, CartNotifier, CartSignal, Checkout, NoopNotifier, Persistence,
};
use rooftop_storefront::toast::Toast;

use super::{Context, print_toast};

/// Prints cart signals to the terminal.
struct TerminalNotifier;

impl CartNotifier for TerminalNotifier {
    fn notify(&self, signal: CartSignal) {
        match signal {
            CartSignal::Badge { count } => println!("🛒 {count}"),
            CartSignal::Added { message, .. } => println!("✓ {message}"),
        }
    }
}

fn manager(ctx: &Context) -> CartManager {
    CartManager::new(ctx.store.clone(), Arc::new(TerminalNotifier))
}

fn report(persistence: Persistence) {
    if persistence == Persistence::MemoryOnly {
        print_toast(&Toast::warning("Keranjang tidak dapat disimpan"));
    }
}

/// Add one unit of `name` at `price` rupiah.
pub fn add(ctx: &Context, name: String, price: u64) {
    let product = Product::new(name, Rupiah::new(price));
    report(manager(ctx).add(&product));
}

/// Remove the line `name`.
pub fn remove(ctx: &Context, name: &str) {
    report(manager(ctx).remove(name));
}

/// Take one unit off the line `name`.
pub fn decrement(ctx: &Context, name: &str) {
    report(manager(ctx).decrement(name));
}

/// Set the quantity of the line `name`; zero removes it.
pub fn set(ctx: &Context, name: &str, quantity: u32) {
    report(manager(ctx).set_quantity(name, quantity));
}

pub fn clear(ctx: &Context) {
    report(manager(ctx).clear());
}

/// List every line with its subtotal, then the total.
pub fn show(ctx: &Context) {
    let cart = CartManager::new(ctx.store.clone(), Arc::new(NoopNotifier));
    if cart.is_empty() {
        println!("Keranjang kosong");
        return;
    }
    for item in cart.items() {
        println!(
            "{:<30} {:>3} x {:>12} = {:>14}",
            item.name,
            item.quantity,
            item.unit_price.to_string(),
            item.line_total().to_string()
        );
    }
    println!("{} item, total {}", cart.item_count(), cart.total());
}

/// Print what the checkout confirmation would ask.
pub fn checkout(ctx: &Context) {
    let cart = CartManager::new(ctx.store.clone(), Arc::new(NoopNotifier));
    match cart.checkout() {
        Checkout::Empty { message } => print_toast(&Toast::info(message)),
        Checkout::Confirm(summary) => println!("{}", summary.confirmation_text()),
    }
}
