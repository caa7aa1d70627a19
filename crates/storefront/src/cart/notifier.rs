//! Outbound signals from the cart to whatever renders it.

use std::sync::{Mutex, PoisonError};

/// Something the cart wants the UI to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartSignal {
    /// The badge should display `count` items (hidden at zero).
    Badge { count: u32 },
    /// A product was added; show `message` in the transient banner.
    Added { name: String, message: String },
}

/// Receives [`CartSignal`]s from a [`CartManager`](super::CartManager).
pub trait CartNotifier: Send + Sync {
    /// Deliver one signal.
    fn notify(&self, signal: CartSignal);
}

/// Discards every signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl CartNotifier for NoopNotifier {
    fn notify(&self, _signal: CartSignal) {}
}

/// Buffers signals until the owner drains them.
#[derive(Debug, Default)]
pub struct SignalBuffer {
    signals: Mutex<Vec<CartSignal>>,
}

impl SignalBuffer {
    /// An empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every buffered signal, oldest first.
    pub fn drain(&self) -> Vec<CartSignal> {
        std::mem::take(&mut *self.signals.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl CartNotifier for SignalBuffer {
    fn notify(&self, signal: CartSignal) {
        self.signals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(signal);
    }
}
