//! # Fast display observer.
//!
//! [`Dashboard`] models the "fast receiver": it settles with no suspension
//! and never fails. The rendering sink is the `log` facade; the last rendered
//! quote and a render counter are kept so tests and callers can observe the
//! side effect.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use log::info;

use crate::error::ObserverError;
use crate::observers::Observe;
use crate::quotes::Quote;

/// In-process chart view that re-renders on every quote.
///
/// ### Properties
/// - **Fast**: no suspension point; settles immediately.
/// - **Infallible**: `on_quote` always returns `Ok(())`.
///
/// The render side effect is a `log::info!` line plus the recorded
/// [`last_seen`](Dashboard::last_seen) quote.
#[derive(Default)]
pub struct Dashboard {
    last: Mutex<Option<Quote>>,
    renders: AtomicU64,
}

impl Dashboard {
    /// Creates a dashboard with an empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dashboard and returns it as a shared handle.
    ///
    /// Keep a clone of the returned `Arc` to read
    /// [`renders`](Dashboard::renders)/[`last_seen`](Dashboard::last_seen)
    /// after attaching it to a ticker.
    #[must_use]
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Returns the most recently rendered quote, if any.
    pub fn last_seen(&self) -> Option<Quote> {
        self.last.lock().expect("dashboard lock poisoned").clone()
    }

    /// Number of quotes rendered so far.
    pub fn renders(&self) -> u64 {
        self.renders.load(AtomicOrdering::Relaxed)
    }
}

#[async_trait]
impl Observe for Dashboard {
    async fn on_quote(&self, quote: &Quote) -> Result<(), ObserverError> {
        info!("[dashboard] chart updated: {} ${}", quote.symbol, quote.price);
        *self.last.lock().expect("dashboard lock poisoned") = Some(quote.clone());
        self.renders.fetch_add(1, AtomicOrdering::Relaxed);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "dashboard"
    }
}
