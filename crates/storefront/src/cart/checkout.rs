//! Checkout hand-off.
//!
//! Checkout itself lives on another page. The cart only decides whether there
//! is anything to check out and, if so, what the confirmation dialog says.

use rooftop_core::{CartLineItem, Rupiah};

/// Page the browser is sent to after a confirmed checkout.
pub const CHECKOUT_PAGE: &str = "checkout.html";

/// Shown instead of a confirmation when the cart has nothing in it.
pub const EMPTY_CART_MESSAGE: &str =
    "Keranjang masih kosong. Silakan tambahkan produk terlebih dahulu.";

/// Closing question of the confirmation dialog.
pub const CONFIRM_QUESTION: &str = "Lanjutkan ke checkout?";

/// Result of pressing the cart button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checkout {
    /// Nothing to buy; show `message` and stay on the page.
    Empty { message: &'static str },
    /// Ask the user to confirm before navigating to [`CHECKOUT_PAGE`].
    Confirm(CheckoutSummary),
}

/// What the user is about to check out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    /// Number of distinct line items (not units).
    pub line_count: usize,
    /// Sum of all line totals.
    pub total: Rupiah,
    /// `(name, quantity)` per line, in cart order.
    pub lines: Vec<(String, u32)>,
}

impl CheckoutSummary {
    /// Summarize `items`; `None` if there are none.
    #[must_use]
    pub fn from_items(items: &[CartLineItem]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            line_count: items.len(),
            total: items.iter().map(CartLineItem::line_total).sum(),
            lines: items
                .iter()
                .map(|item| (item.name.clone(), item.quantity))
                .collect(),
        })
    }

    /// Full text of the confirmation dialog.
    #[must_use]
    pub fn confirmation_text(&self) -> String {
        let lines = self
            .lines
            .iter()
            .map(|(name, quantity)| format!("{name} ({quantity}x)"))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "Anda memiliki {} item di keranjang.\n\nTotal: {}\n\n{lines}\n\n{CONFIRM_QUESTION}",
            self.line_count, self.total
        )
    }
}
