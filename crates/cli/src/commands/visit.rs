//! Page load simulation.

use rooftop_storefront::app::{Effect, PageLayout, Storefront};
use rooftop_storefront::storage::ExpiringStore;

use super::{Context, print_toast};

/// Bootstrap the storefront and print what the page would show.
pub fn run(ctx: &Context) {
    let (storefront, effects) = Storefront::bootstrap(
        ctx.config.clone(),
        ctx.store.clone(),
        PageLayout::default(),
    );

    for effect in &effects {
        match effect {
            Effect::Theme { theme, icon, .. } => println!("{icon} {theme}"),
            Effect::Badge { count } => println!("🛒 {count}"),
            Effect::Toast(toast) => print_toast(toast),
            Effect::Promo(promo) => println!("{} {}", promo.icon, promo.text),
            other => tracing::debug!(effect = ?other, "Startup effect"),
        }
    }
    tracing::debug!(storefront = ?storefront, "Page loaded");

    match ExpiringStore::new(ctx.store.clone()).size() {
        Ok(size) => println!("💾 {size}"),
        Err(e) => tracing::warn!(error = %e, "Could not measure storage"),
    }
}
