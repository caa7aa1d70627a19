//! Cart line items and the products that create them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Rupiah;

/// A product as offered by an "add to cart" control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product name; doubles as the line item key.
    pub name: String,
    /// Price of one unit.
    pub unit_price: Rupiah,
}

impl Product {
    /// Create a product.
    #[must_use]
    pub fn new(name: impl Into<String>, unit_price: Rupiah) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }
}

/// One product entry in the cart.
///
/// Serialized as `{name, price, quantity, addedAt}` so that carts written by
/// earlier versions of the site load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Product name, unique within a cart.
    pub name: String,
    /// Price of one unit.
    #[serde(rename = "price")]
    pub unit_price: Rupiah,
    /// Number of units, at least 1 for any item held in a cart.
    pub quantity: u32,
    /// When the product was first added. Quantity changes leave it untouched.
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// A fresh line item with quantity 1.
    #[must_use]
    pub fn new(product: &Product, added_at: DateTime<Utc>) -> Self {
        Self {
            name: product.name.clone(),
            unit_price: product.unit_price,
            quantity: 1,
            added_at,
        }
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Rupiah {
        self.unit_price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn added_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_new_line_item_has_quantity_one() {
        let product = Product::new("Arabika Gayo", Rupiah::new(45_000));
        let item = CartLineItem::new(&product, added_at());
        assert_eq!(item.quantity, 1);
        assert_eq!(item.line_total(), Rupiah::new(45_000));
    }

    #[test]
    fn test_serialized_field_names() {
        let product = Product::new("Robusta Lampung", Rupiah::new(38_000));
        let mut item = CartLineItem::new(&product, added_at());
        item.quantity = 3;

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["name"], "Robusta Lampung");
        assert_eq!(value["price"], 38_000);
        assert_eq!(value["quantity"], 3);
        assert!(value["addedAt"].as_str().unwrap().starts_with("2026-03-01T09:30:00"));
    }

    #[test]
    fn test_deserializes_browser_written_item() {
        let json = r#"{"name":"Kopi Toraja","price":52000,"quantity":2,"addedAt":"2025-12-24T08:15:30.123Z"}"#;
        let item: CartLineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Kopi Toraja");
        assert_eq!(item.line_total(), Rupiah::new(104_000));
    }
}
