//! Rotating promotion banner.

/// One promotion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promo {
    pub icon: &'static str,
    pub text: &'static str,
}

/// Promotions shown in rotation.
pub const PROMOS: &[Promo] = &[
    Promo {
        icon: "🎉",
        text: "PROMO SPESIAL! Diskon 20% untuk pembelian Arabika Sumatera. Berlaku hingga akhir bulan!",
    },
    Promo {
        icon: "☕",
        text: "GRATIS ONGKIR untuk pembelian di atas Rp 100.000! Pesan sekarang!",
    },
    Promo {
        icon: "🎁",
        text: "Beli 2 Gratis 1! Promo spesial untuk pelanggan setia kami!",
    },
    Promo {
        icon: "⭐",
        text: "Member Baru? Dapatkan diskon 15% untuk pembelian pertama!",
    },
];

/// Which promotion is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoBanner {
    promos: &'static [Promo],
    index: usize,
}

impl Default for PromoBanner {
    fn default() -> Self {
        Self {
            promos: PROMOS,
            index: 0,
        }
    }
}

impl PromoBanner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotation timer fired: move to the next promotion.
    pub fn tick(&mut self) -> Option<Promo> {
        if self.promos.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.promos.len();
        self.current()
    }

    /// The promotion on display.
    #[must_use]
    pub fn current(&self) -> Option<Promo> {
        self.promos.get(self.index).copied()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_wraps() {
        let mut banner = PromoBanner::new();
        let first = banner.current().unwrap();
        for _ in 0..PROMOS.len() - 1 {
            assert_ne!(banner.tick().unwrap(), first);
        }
        assert_eq!(banner.tick().unwrap(), first);
    }
}
