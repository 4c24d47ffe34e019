//! # Slow, unreliable persistence observer.
//!
//! [`AuditLog`] models the "slow receiver with a flaky downstream": it
//! suspends for a configured latency, then either fails with a configured
//! probability or appends the quote to an in-memory journal.
//!
//! The latency and failure rate live in [`AuditConfig`]; tests pin
//! `fail_rate` to `0.0` or `1.0` instead of relying on live randomness.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use rand::Rng;

use crate::error::ObserverError;
use crate::observers::Observe;
use crate::quotes::Quote;

/// Tuning knobs for [`AuditLog`].
///
/// ## Field semantics
/// - `delay`: simulated store round-trip, awaited before the outcome is
///   decided (`Duration::ZERO` = settle immediately)
/// - `fail_rate`: probability in `[0.0, 1.0]` that the store write fails
///   after the delay (`0.0` = reliable, `1.0` = always fails; values are
///   compared against a uniform sample from `[0.0, 1.0)`)
#[derive(Clone, Copy, Debug)]
pub struct AuditConfig {
    /// Simulated store latency per quote.
    pub delay: Duration,
    /// Probability that persisting a quote fails.
    pub fail_rate: f64,
}

impl Default for AuditConfig {
    /// Returns the reference behavior:
    ///
    /// - `delay = 2s`
    /// - `fail_rate = 0.2`
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
            fail_rate: 0.2,
        }
    }
}

/// Journal writer that persists every quote it survives.
///
/// ### Properties
/// - **Slow**: suspends for [`AuditConfig::delay`] before settling.
/// - **Unreliable**: fails with probability [`AuditConfig::fail_rate`];
///   a failed write leaves no journal entry.
/// - The journal is in-memory and append-only, readable via
///   [`entries`](AuditLog::entries).
pub struct AuditLog {
    cfg: AuditConfig,
    journal: Mutex<Vec<Quote>>,
}

impl AuditLog {
    /// Creates an audit log with the given configuration.
    #[must_use]
    pub fn new(cfg: AuditConfig) -> Self {
        Self {
            cfg,
            journal: Mutex::new(Vec::new()),
        }
    }

    /// Creates the audit log and returns it as a shared handle.
    #[must_use]
    pub fn arc(cfg: AuditConfig) -> Arc<Self> {
        Arc::new(Self::new(cfg))
    }

    /// Returns a copy of the journal, in persistence order.
    pub fn entries(&self) -> Vec<Quote> {
        self.journal.lock().expect("journal lock poisoned").clone()
    }

    /// Number of persisted quotes.
    pub fn len(&self) -> usize {
        self.journal.lock().expect("journal lock poisoned").len()
    }

    /// Returns `true` when nothing has been persisted yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Observe for AuditLog {
    async fn on_quote(&self, quote: &Quote) -> Result<(), ObserverError> {
        debug!("[audit-log] connecting to store for {}", quote.symbol);
        tokio::time::sleep(self.cfg.delay).await;

        if self.cfg.fail_rate > 0.0 && rand::rng().random::<f64>() < self.cfg.fail_rate {
            return Err(ObserverError::Sink {
                error: "store connection failed".to_string(),
            });
        }

        self.journal
            .lock()
            .expect("journal lock poisoned")
            .push(quote.clone());
        info!("[audit-log] persisted {} ${}", quote.symbol, quote.price);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "audit-log"
    }
}
