//! Per-origin visit counter.

use crate::storage::ExpiringStore;
use crate::toast::Toast;

/// Store key of the visit count.
pub const VISIT_COUNT_KEY: &str = "visit_count";

/// What to say about this visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitGreeting {
    /// First visit: log a welcome.
    Welcome,
    /// Tenth visit.
    TenthVisit,
    /// Every fiftieth visit.
    Milestone(u64),
    /// Nothing special.
    Regular(u64),
}

impl VisitGreeting {
    /// Toast for this visit, if it deserves one.
    #[must_use]
    pub fn toast(&self) -> Option<Toast> {
        match self {
            Self::TenthVisit => Some(Toast::success("🎉 Terima kasih sudah 10x mengunjungi kami!")),
            Self::Milestone(n) => Some(Toast::success(format!(
                "🌟 Wow! Kunjungan ke-{n}! Terima kasih atas kesetiaan Anda!"
            ))),
            Self::Welcome | Self::Regular(_) => None,
        }
    }
}

/// Counts visits in the expiring store.
#[derive(Clone)]
pub struct VisitorCounter {
    store: ExpiringStore,
}

impl VisitorCounter {
    #[must_use]
    pub const fn new(store: ExpiringStore) -> Self {
        Self { store }
    }

    /// Count this visit and decide how to greet it.
    ///
    /// A failed write is logged; the greeting still reflects the new count.
    pub fn record_visit(&self) -> (u64, VisitGreeting) {
        let count = self
            .store
            .get::<u64>(VISIT_COUNT_KEY)
            .unwrap_or(0)
            .saturating_add(1);

        if let Err(e) = self.store.set(VISIT_COUNT_KEY, &count, None) {
            tracing::warn!(error = %e, "Could not save visit count");
        }

        let greeting = match count {
            1 => {
                tracing::info!("Selamat datang di Roof Top Cafe!");
                VisitGreeting::Welcome
            }
            10 => VisitGreeting::TenthVisit,
            n if n % 50 == 0 => VisitGreeting::Milestone(n),
            n => VisitGreeting::Regular(n),
        };
        tracing::info!(count, "Visit count");
        (count, greeting)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_counts_and_greetings() {
        let counter = VisitorCounter::new(ExpiringStore::new(Arc::new(MemoryStore::new())));

        assert_eq!(counter.record_visit(), (1, VisitGreeting::Welcome));
        let greetings: Vec<_> = (2..=50).map(|_| counter.record_visit().1).collect();

        assert_eq!(greetings[8], VisitGreeting::TenthVisit);
        assert_eq!(greetings[0], VisitGreeting::Regular(2));
        assert_eq!(greetings[48], VisitGreeting::Milestone(50));
        assert!(greetings[48].toast().unwrap().message.contains("ke-50"));
        assert!(VisitGreeting::Regular(7).toast().is_none());
    }
}
