//! Type-safe price representation in Indonesian rupiah.
//!
//! Rupiah prices on the site never carry a fractional part, so amounts are
//! stored as whole rupiah in a `u64`. Formatting follows the `id-ID` locale
//! with zero fraction digits: `Rp` followed by a no-break space and
//! dot-separated thousands groups.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

/// A non-negative amount of whole rupiah.
///
/// Arithmetic saturates at `u64::MAX` instead of overflowing.
///
/// ## Examples
///
/// ```
/// use rooftop_core::Rupiah;
///
/// let price = Rupiah::new(45_000);
/// assert_eq!(price.times(2), Rupiah::new(90_000));
/// assert_eq!(price.to_string(), "Rp\u{a0}45.000");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rupiah(u64);

impl Rupiah {
    /// Zero rupiah.
    pub const ZERO: Self = Self(0);

    /// Symbol prefix used by the `id-ID` currency format.
    pub const SYMBOL: &'static str = "Rp";

    /// Create a price from a whole rupiah amount.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the amount in whole rupiah.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Multiply by a quantity, saturating at `u64::MAX`.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\u{a0}{}", Self::SYMBOL, group_thousands(self.0))
    }
}

impl Add for Rupiah {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<u64> for Rupiah {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

/// Insert `.` between every group of three digits, counting from the right.
fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
