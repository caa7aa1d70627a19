//! Property-based tests for the cart.
//! Random operation sequences are replayed against a plain model list; the
//! cart must agree with it, and with its own reload, after every step.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rooftop_core::{Product, Rupiah};
use rooftop_storefront::cart::{CartManager, NoopNotifier};
use rooftop_storefront::storage::{KeyValueStore, MemoryStore};

const NAMES: [&str; 4] = ["Arabika Gayo", "Robusta Lampung", "Toraja Kalosi", "Kintamani"];

#[derive(Debug, Clone)]
enum Op {
    Add { name: usize, price: u64 },
    Remove(usize),
    Decrement(usize),
    SetQuantity { name: usize, quantity: u32 },
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..NAMES.len(), 1_000u64..=500_000).prop_map(|(name, price)| Op::Add { name, price }),
        1 => (0..NAMES.len()).prop_map(Op::Remove),
        2 => (0..NAMES.len()).prop_map(Op::Decrement),
        1 => (0..NAMES.len(), 0u32..5).prop_map(|(name, quantity)| Op::SetQuantity { name, quantity }),
        1 => Just(Op::Clear),
    ]
}

/// `(name, unit price, quantity)` per line, in cart order.
type Model = Vec<(&'static str, u64, u32)>;

fn apply(model: &mut Model, op: &Op) {
    match *op {
        Op::Add { name, price } => match model.iter_mut().find(|line| line.0 == NAMES[name]) {
            Some(line) => line.2 += 1,
            None => model.push((NAMES[name], price, 1)),
        },
        Op::Remove(name) => model.retain(|line| line.0 != NAMES[name]),
        Op::Decrement(name) => {
            if let Some(line) = model.iter_mut().find(|line| line.0 == NAMES[name]) {
                line.2 -= 1;
            }
            model.retain(|line| line.2 > 0);
        }
        Op::SetQuantity { name, quantity } => {
            if quantity == 0 {
                model.retain(|line| line.0 != NAMES[name]);
            } else if let Some(line) = model.iter_mut().find(|line| line.0 == NAMES[name]) {
                line.2 = quantity;
            }
        }
        Op::Clear => model.clear(),
    }
}

fn run(cart: &mut CartManager, op: &Op) {
    let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
    match *op {
        Op::Add { name, price } => {
            cart.add_at(&Product::new(NAMES[name], Rupiah::new(price)), now);
        }
        Op::Remove(name) => {
            cart.remove(NAMES[name]);
        }
        Op::Decrement(name) => {
            cart.decrement(NAMES[name]);
        }
        Op::SetQuantity { name, quantity } => {
            cart.set_quantity(NAMES[name], quantity);
        }
        Op::Clear => {
            cart.clear();
        }
    }
}

fn new_cart(store: &Arc<MemoryStore>) -> CartManager {
    let store: Arc<dyn KeyValueStore> = store.clone();
    CartManager::new(store, Arc::new(NoopNotifier))
}

proptest::proptest! {
    /// N adds of one product give one line with quantity N.
    #[test]
    fn repeated_adds_merge_into_one_line(adds in 1u32..40, price in 1_000u64..=500_000) {
        let store = Arc::new(MemoryStore::new());
        let mut cart = new_cart(&store);
        let gayo = Product::new("Arabika Gayo", Rupiah::new(price));
        for _ in 0..adds {
            cart.add(&gayo);
        }

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, adds);
        assert_eq!(cart.item_count(), adds);
        assert_eq!(cart.total(), Rupiah::new(price * u64::from(adds)));
    }

    /// After every step of any operation sequence the cart matches the model,
    /// keeps one line per name with quantity >= 1, reports totals equal to
    /// the sums, and reloads to the same list.
    #[test]
    fn cart_agrees_with_model(ops in proptest::collection::vec(op(), 0..60)) {
        let store = Arc::new(MemoryStore::new());
        let mut cart = new_cart(&store);
        let mut model = Model::new();

        for op in &ops {
            run(&mut cart, op);
            apply(&mut model, op);

            let observed: Model = cart
                .items()
                .iter()
                .map(|item| {
                    let name = NAMES.iter().find(|n| **n == item.name).copied().unwrap();
                    (name, item.unit_price.amount(), item.quantity)
                })
                .collect();
            assert_eq!(observed, model, "after {op:?}");

            for (i, item) in cart.items().iter().enumerate() {
                assert!(item.quantity >= 1);
                assert!(cart.items()[..i].iter().all(|other| other.name != item.name));
            }

            let total: u64 = model.iter().map(|(_, price, qty)| price * u64::from(*qty)).sum();
            let count: u32 = model.iter().map(|(_, _, qty)| qty).sum();
            assert_eq!(cart.total(), Rupiah::new(total));
            assert_eq!(cart.item_count(), count);

            let reloaded = new_cart(&store);
            assert_eq!(reloaded.items(), cart.items());
        }
    }
}
