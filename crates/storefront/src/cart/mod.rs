//! Shopping cart state.
//!
//! [`CartManager`] owns the authoritative list of line items for one origin.
//! Every mutation is followed by a save, and every save republishes the badge
//! count through the injected [`CartNotifier`].
//!
//! # Persistence
//!
//! The list is stored as a JSON array under [`CART_STORAGE_KEY`]. Storage
//! problems never reach the caller: a bad read starts an empty cart, a failed
//! write leaves the in-memory list in charge and is reported as
//! [`Persistence::MemoryOnly`].

mod checkout;
mod notifier;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rooftop_core::{CartLineItem, Product, Rupiah};

use crate::storage::{KeyValueStore, StorageError};

pub use checkout::{CHECKOUT_PAGE, CONFIRM_QUESTION, Checkout, CheckoutSummary, EMPTY_CART_MESSAGE};
pub use notifier::{CartNotifier, CartSignal, NoopNotifier, SignalBuffer};

/// Store key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "rooftop_cart";

/// Outcome of a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Written to the store.
    Persisted,
    /// The write failed; the cart lives in memory for this session.
    MemoryOnly,
}

/// Banner text shown after `name` is added.
#[must_use]
pub fn added_message(name: &str) -> String {
    format!("{name} ditambahkan ke keranjang")
}

/// The cart for one origin.
pub struct CartManager {
    items: Vec<CartLineItem>,
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn CartNotifier>,
}

impl CartManager {
    /// Create a manager and load the persisted cart.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn CartNotifier>) -> Self {
        let mut cart = Self {
            items: Vec::new(),
            store,
            notifier,
        };
        cart.load();
        cart
    }

    /// Replace the in-memory list with the persisted one.
    ///
    /// A missing key gives an empty cart. Unreadable or malformed data is
    /// logged and also gives an empty cart. Lines with quantity 0 are dropped
    /// and repeated names are merged into the first occurrence.
    pub fn load(&mut self) {
        self.items = match self.read_items() {
            Ok(items) => normalize(items),
            Err(e) => {
                tracing::error!(key = CART_STORAGE_KEY, error = %e, "Error loading cart");
                Vec::new()
            }
        };
        tracing::debug!(lines = self.items.len(), "Cart loaded");
    }

    fn read_items(&self) -> Result<Vec<CartLineItem>, StorageError> {
        match self.store.get(CART_STORAGE_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Persist the list, then republish the badge count.
    ///
    /// The badge is published even when the write fails, since the in-memory
    /// list is what the user is looking at.
    pub fn save(&self) -> Persistence {
        let persistence = match self.write_items() {
            Ok(()) => Persistence::Persisted,
            Err(e) => {
                tracing::error!(key = CART_STORAGE_KEY, error = %e, "Error saving cart");
                Persistence::MemoryOnly
            }
        };
        self.publish_badge();
        persistence
    }

    fn write_items(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.items)?;
        self.store.set(CART_STORAGE_KEY, &json)
    }

    /// Send the current item count to the badge.
    pub fn publish_badge(&self) {
        self.notifier.notify(CartSignal::Badge {
            count: self.item_count(),
        });
    }

    /// Add one unit of `product`.
    ///
    /// An existing line with the same name gains one unit and keeps its
    /// original price and timestamp; otherwise a new line is appended.
    pub fn add(&mut self, product: &Product) -> Persistence {
        self.add_at(product, Utc::now())
    }

    /// [`CartManager::add`] with an explicit clock reading for new lines.
    pub fn add_at(&mut self, product: &Product, now: DateTime<Utc>) -> Persistence {
        match self.items.iter_mut().find(|item| item.name == product.name) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => self.items.push(CartLineItem::new(product, now)),
        }

        let persistence = self.save();
        self.notifier.notify(CartSignal::Added {
            name: product.name.clone(),
            message: added_message(&product.name),
        });
        tracing::info!(product = %product.name, count = self.item_count(), "Added to cart");
        persistence
    }

    /// Remove the line named `name`, if present. Saves either way.
    pub fn remove(&mut self, name: &str) -> Persistence {
        self.items.retain(|item| item.name != name);
        self.save()
    }

    /// Take one unit off the line named `name`, removing it at zero.
    pub fn decrement(&mut self, name: &str) -> Persistence {
        if let Some(item) = self.items.iter_mut().find(|item| item.name == name) {
            item.quantity = item.quantity.saturating_sub(1);
        }
        self.items.retain(|item| item.quantity > 0);
        self.save()
    }

    /// Set the quantity of the line named `name`; zero removes it.
    ///
    /// Unknown names are left alone (there is no price to create them with).
    pub fn set_quantity(&mut self, name: &str, quantity: u32) -> Persistence {
        if quantity == 0 {
            return self.remove(name);
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.name == name) {
            item.quantity = quantity;
        }
        self.save()
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> Persistence {
        self.items.clear();
        self.save()
    }

    /// Σ `unit_price * quantity`.
    #[must_use]
    pub fn total(&self) -> Rupiah {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Σ `quantity`.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |sum, item| sum.saturating_add(item.quantity))
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// The line named `name`.
    #[must_use]
    pub fn line(&self, name: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// What pressing the cart button should do.
    #[must_use]
    pub fn checkout(&self) -> Checkout {
        CheckoutSummary::from_items(&self.items).map_or(
            Checkout::Empty {
                message: EMPTY_CART_MESSAGE,
            },
            Checkout::Confirm,
        )
    }
}

impl std::fmt::Debug for CartManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartManager")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

/// Drop empty lines and merge repeated names into their first occurrence.
fn normalize(items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let mut out: Vec<CartLineItem> = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity == 0 {
            tracing::warn!(product = %item.name, "Dropping cart line with zero quantity");
            continue;
        }
        if let Some(existing) = out.iter_mut().find(|e| e.name == item.name) {
            tracing::warn!(product = %item.name, "Merging duplicate cart line");
            existing.quantity = existing.quantity.saturating_add(item.quantity);
        } else {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn gayo() -> Product {
        Product::new("Arabika Gayo", Rupiah::new(45_000))
    }

    fn lampung() -> Product {
        Product::new("Robusta Lampung", Rupiah::new(38_000))
    }

    fn cart_with(store: &Arc<MemoryStore>) -> CartManager {
        CartManager::new(store.clone(), Arc::new(NoopNotifier))
    }

    #[test]
    fn test_repeated_add_increments_single_line() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = cart_with(&store);

        cart.add(&gayo());
        cart.add(&gayo());

        assert_eq!(cart.items().len(), 1);
        let line = cart.line("Arabika Gayo").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.unit_price, Rupiah::new(45_000));
        assert_eq!(cart.total(), Rupiah::new(90_000));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_add_keeps_first_timestamp() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = cart_with(&store);
        let first = Utc::now() - chrono::Duration::hours(2);

        cart.add_at(&gayo(), first);
        cart.add_at(&gayo(), Utc::now());

        assert_eq!(cart.line("Arabika Gayo").unwrap().added_at, first);
    }

    #[test]
    fn test_totals_after_mixed_operations() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = cart_with(&store);

        cart.add(&gayo());
        cart.add(&lampung());
        cart.add(&lampung());
        cart.add(&gayo());
        cart.add(&lampung());
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Rupiah::new(2 * 45_000 + 3 * 38_000));

        cart.remove("Arabika Gayo");
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), Rupiah::new(3 * 38_000));

        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Rupiah::ZERO);
    }

    #[test]
    fn test_remove_missing_is_noop_but_saves() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = cart_with(&store);
        cart.add(&gayo());
        store.remove(CART_STORAGE_KEY).unwrap();

        assert_eq!(cart.remove("Kopi Luwak"), Persistence::Persisted);
        assert_eq!(cart.items().len(), 1);
        assert!(store.get(CART_STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_save_then_load_preserves_order_and_values() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = cart_with(&store);
        cart.add(&lampung());
        cart.add(&gayo());
        cart.add(&lampung());

        let reloaded = cart_with(&store);
        assert_eq!(reloaded.items(), cart.items());
        assert_eq!(reloaded.items()[0].name, "Robusta Lampung");
    }

    #[test]
    fn test_clear_then_reload_is_empty() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = cart_with(&store);
        cart.add(&gayo());
        cart.clear();

        let reloaded = cart_with(&store);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_malformed_storage_loads_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(CART_STORAGE_KEY, "{\"name\": oops").unwrap();
        assert!(cart_with(&store).is_empty());

        store.set(CART_STORAGE_KEY, "{\"not\":\"an array\"}").unwrap();
        assert!(cart_with(&store).is_empty());
    }

    #[test]
    fn test_load_drops_zero_quantity_and_merges_duplicates() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                CART_STORAGE_KEY,
                r#"[
                    {"name":"Arabika Gayo","price":45000,"quantity":1,"addedAt":"2026-01-01T00:00:00Z"},
                    {"name":"Robusta Bali","price":40000,"quantity":0,"addedAt":"2026-01-01T00:00:00Z"},
                    {"name":"Arabika Gayo","price":45000,"quantity":2,"addedAt":"2026-01-02T00:00:00Z"}
                ]"#,
            )
            .unwrap();

        let cart = cart_with(&store);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_decrement_removes_at_zero() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = cart_with(&store);
        cart.add(&gayo());
        cart.add(&gayo());

        cart.decrement("Arabika Gayo");
        assert_eq!(cart.line("Arabika Gayo").unwrap().quantity, 1);

        cart.decrement("Arabika Gayo");
        assert!(cart.line("Arabika Gayo").is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = cart_with(&store);
        cart.add(&gayo());

        cart.set_quantity("Arabika Gayo", 4);
        assert_eq!(cart.total(), Rupiah::new(180_000));

        cart.set_quantity("Kopi Luwak", 3);
        assert_eq!(cart.items().len(), 1);

        cart.set_quantity("Arabika Gayo", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let store = Arc::new(MemoryStore::with_quota(8));
        let mut cart = cart_with(&store);

        assert_eq!(cart.add(&gayo()), Persistence::MemoryOnly);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(store.get(CART_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_signals_badge_then_banner() {
        let store = Arc::new(MemoryStore::new());
        let signals = Arc::new(SignalBuffer::new());
        let mut cart = CartManager::new(store, signals.clone());

        cart.add(&gayo());
        assert_eq!(
            signals.drain(),
            vec![
                CartSignal::Badge { count: 1 },
                CartSignal::Added {
                    name: "Arabika Gayo".to_string(),
                    message: "Arabika Gayo ditambahkan ke keranjang".to_string(),
                },
            ]
        );

        cart.remove("Arabika Gayo");
        assert_eq!(signals.drain(), vec![CartSignal::Badge { count: 0 }]);
    }

    #[test]
    fn test_checkout_empty_and_confirm() {
        let store = Arc::new(MemoryStore::new());
        let mut cart = cart_with(&store);
        assert_eq!(
            cart.checkout(),
            Checkout::Empty {
                message: EMPTY_CART_MESSAGE
            }
        );

        cart.add(&gayo());
        cart.add(&gayo());
        let Checkout::Confirm(summary) = cart.checkout() else {
            panic!("expected a confirmation");
        };
        assert_eq!(summary.total, Rupiah::new(90_000));
        assert_eq!(summary.lines, vec![("Arabika Gayo".to_string(), 2)]);
    }
}
