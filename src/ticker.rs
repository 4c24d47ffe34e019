//! # Ticker: the notifying source.
//!
//! The [`Ticker`] owns the latest-price book and the observer registry. On
//! every [`set_price`](Ticker::set_price) it fans the new quote out to all
//! registered observers **concurrently**, waits for every one of them to
//! settle, and aggregates the outcomes into a [`NotifyReport`].
//!
//! ## Key responsibilities
//! - record the new price, stamp the [`Quote`] (seq + timestamp)
//! - snapshot the registry and **fan out** one delivery per entry
//! - settle-all: never short-circuit on the first failure
//! - catch observer panics at the delivery boundary
//! - log failures (count + per-observer reason) without failing the call
//!
//! ## Delivery flow
//! ```text
//! set_price(symbol, price)
//!   ├─► book.insert(symbol, price)
//!   ├─► snapshot = observers.snapshot()          (order fixed here)
//!   ├─► launch on_quote(&quote) for every entry  (no ordering between them)
//!   ├─► join_all(...)                            (waits for all settlements)
//!   ├─► failures? ─► log::warn! per observer     (side effect only)
//!   └─► NotifyReport                             (never an Err)
//! ```
//!
//! ## What the ticker does NOT do
//! - retry a failed observer
//! - cancel or time out a stuck observer (a delivery that never settles
//!   stalls the whole cycle)
//! - interpret failure reasons: they are stored opaquely in the report

use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::join_all;
use futures::FutureExt;
use log::{debug, warn};

use crate::error::ObserverError;
use crate::observers::{ObserverRef, ObserverSet};
use crate::quotes::{NotifyReport, Outcome, Quote};

/// Price source with an attached observer registry.
///
/// Registration (`attach`/`detach`) and notification (`set_price`) all take
/// exclusive access, so the registry cannot change underneath an in-flight
/// fan-out; the snapshot taken at fan-out start decides exactly who receives
/// the quote and whose outcomes the report contains.
///
/// ## Example
/// ```rust
/// use quotecast::{Dashboard, ObserverRef, Ticker};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut ticker = Ticker::new();
/// ticker.attach(Dashboard::arc() as ObserverRef);
///
/// let report = ticker.set_price("AAPL", 150.0).await;
/// assert_eq!(report.total(), 1);
/// assert!(report.is_clean());
/// # }
/// ```
#[derive(Default)]
pub struct Ticker {
    observers: ObserverSet,
    book: HashMap<Arc<str>, f64>,
}

impl Ticker {
    /// Creates a ticker with no observers and an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer at the end of the delivery order.
    ///
    /// No de-duplication: attaching the same handle twice delivers every
    /// quote to it twice.
    pub fn attach(&mut self, observer: ObserverRef) {
        self.observers.attach(observer);
    }

    /// Unregisters every entry matching `observer` by identity.
    ///
    /// Returns the number of entries removed (`0` if not registered).
    /// Subsequent `set_price` calls will not deliver to the handle; cycles
    /// that already completed keep their outcomes.
    pub fn detach(&mut self, observer: &ObserverRef) -> usize {
        self.observers.detach(observer)
    }

    /// Number of registered observer entries.
    #[inline]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Returns the last price set for `symbol`, if any.
    pub fn price(&self, symbol: &str) -> Option<f64> {
        self.book.get(symbol).copied()
    }

    /// Records a new price and notifies every registered observer.
    ///
    /// The returned future resolves only once **every** observer of the
    /// registry snapshot has settled, success or failure. Individual
    /// failures are captured in the report and logged; they never surface
    /// as an error from this method.
    pub async fn set_price(&mut self, symbol: impl Into<Arc<str>>, price: f64) -> NotifyReport {
        let quote = Quote::new(symbol, price);
        self.book.insert(Arc::clone(&quote.symbol), price);

        let snapshot = self.observers.snapshot();
        debug!(
            "[ticker] update: {} ${} (seq={} observers={})",
            quote.symbol,
            quote.price,
            quote.seq,
            snapshot.len()
        );

        let outcomes = deliver(&snapshot, &quote).await;
        let report = NotifyReport::new(quote, outcomes);

        if report.failed() > 0 {
            warn!(
                "[ticker] {} observer(s) failed to apply {} ${}",
                report.failed(),
                report.quote.symbol,
                report.quote.price
            );
            for outcome in report.failures() {
                if let Some(err) = outcome.error() {
                    warn!(
                        "[ticker]  - observer={} reason={}",
                        outcome.observer,
                        err.as_message()
                    );
                }
            }
        }
        report
    }
}

/// Delivers one quote to every snapshotted observer concurrently.
///
/// Each delivery is wrapped in `catch_unwind`: a panicking observer yields an
/// [`ObserverError::Panicked`] outcome instead of tearing down the cycle.
/// Because failures are values, `join_all` cannot short-circuit; the result
/// vector is aligned to the snapshot order.
async fn deliver(snapshot: &[ObserverRef], quote: &Quote) -> Vec<Outcome> {
    let deliveries = snapshot.iter().map(|observer| {
        let name = observer.name();
        let fut = observer.on_quote(quote);
        async move {
            match AssertUnwindSafe(fut).catch_unwind().await {
                Ok(result) => Outcome::new(name, result),
                Err(panic) => Outcome::new(
                    name,
                    Err(ObserverError::Panicked {
                        info: panic_info(&*panic),
                    }),
                ),
            }
        }
    });
    join_all(deliveries).await
}

/// Extracts a printable message from a caught panic payload.
fn panic_info(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::observers::{AuditConfig, AuditLog, Dashboard, Observe};

    /// Counting observer with an optional guaranteed failure, the test-side
    /// stand-in for real sinks.
    struct Probe {
        label: &'static str,
        calls: AtomicUsize,
        fail: bool,
    }

    impl Probe {
        fn arc(label: &'static str) -> Arc<Self> {
            Arc::new(Self {
                label,
                calls: AtomicUsize::new(0),
                fail: false,
            })
        }

        fn failing(label: &'static str) -> Arc<Self> {
            Arc::new(Self {
                label,
                calls: AtomicUsize::new(0),
                fail: true,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(AtomicOrdering::SeqCst)
        }
    }

    #[async_trait]
    impl Observe for Probe {
        async fn on_quote(&self, _quote: &Quote) -> Result<(), ObserverError> {
            if self.fail {
                return Err(ObserverError::Fail {
                    error: format!("{} crashed", self.label),
                });
            }
            self.calls.fetch_add(1, AtomicOrdering::SeqCst);
            Ok(())
        }

        fn name(&self) -> &'static str {
            self.label
        }
    }

    /// Observer that suspends for a fixed delay before settling.
    struct Sleeper {
        delay: Duration,
    }

    #[async_trait]
    impl Observe for Sleeper {
        async fn on_quote(&self, _quote: &Quote) -> Result<(), ObserverError> {
            tokio::time::sleep(self.delay).await;
            Ok(())
        }

        fn name(&self) -> &'static str {
            "sleeper"
        }
    }

    struct Panicker;

    #[async_trait]
    impl Observe for Panicker {
        async fn on_quote(&self, _quote: &Quote) -> Result<(), ObserverError> {
            panic!("observer blew up");
        }

        fn name(&self) -> &'static str {
            "panicker"
        }
    }

    #[test]
    fn test_registry_count_tracks_attach_and_detach() {
        let mut ticker = Ticker::new();
        let a = Probe::arc("a");
        let b = Probe::arc("b");

        ticker.attach(a.clone());
        ticker.attach(b.clone());
        ticker.attach(a.clone()); // duplicate entry, allowed
        assert_eq!(ticker.observer_count(), 3);

        assert_eq!(ticker.detach(&(a as ObserverRef)), 2);
        assert_eq!(ticker.observer_count(), 1);

        let absent = Probe::arc("absent");
        assert_eq!(ticker.detach(&(absent as ObserverRef)), 0);
        assert_eq!(ticker.observer_count(), 1);
    }

    #[tokio::test]
    async fn test_notifies_every_observer_once() {
        let mut ticker = Ticker::new();
        let obs1 = Probe::arc("obs1");
        let obs2 = Probe::arc("obs2");
        ticker.attach(obs1.clone());
        ticker.attach(obs2.clone());

        let report = ticker.set_price("AAPL", 150.0).await;

        assert_eq!(report.total(), 2);
        assert!(report.is_clean());
        assert_eq!(obs1.calls(), 1);
        assert_eq!(obs2.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_does_not_abort_siblings() {
        let mut ticker = Ticker::new();
        let safe = Probe::arc("safe");
        let failing = Probe::failing("fail");
        ticker.attach(safe.clone());
        ticker.attach(failing.clone());

        let report = ticker.set_price("MSFT", 300.0).await;

        assert_eq!(safe.calls(), 1, "safe observer must still be notified");
        assert_eq!(report.failed(), 1);
        assert_eq!(report.succeeded(), 1);

        let failure = report.failures().next().expect("one failure reported");
        assert_eq!(failure.observer, "fail");
        let err = failure.error().expect("failure slot carries the error");
        assert!(err.as_message().contains("fail crashed"));
    }

    #[tokio::test]
    async fn test_detached_observer_receives_nothing() {
        let mut ticker = Ticker::new();
        let obs = Probe::arc("obs");
        let stays = Probe::arc("stays");
        ticker.attach(obs.clone());
        ticker.attach(stays.clone());

        ticker.set_price("AAPL", 100.0).await;
        assert_eq!(obs.calls(), 1);

        ticker.detach(&(obs.clone() as ObserverRef));
        let report = ticker.set_price("AAPL", 200.0).await;

        assert_eq!(obs.calls(), 1, "no new side effect after detach");
        assert_eq!(stays.calls(), 2, "remaining observer keeps receiving");
        assert_eq!(report.total(), 1);
    }

    #[tokio::test]
    async fn test_every_observer_failing_still_resolves() {
        let mut ticker = Ticker::new();
        for label in ["f1", "f2", "f3"] {
            ticker.attach(Probe::failing(label));
        }

        let report = ticker.set_price("AAPL", 1.0).await;

        assert_eq!(report.total(), 3);
        assert_eq!(report.failed(), 3);
        assert_eq!(report.succeeded(), 0);
    }

    #[tokio::test]
    async fn test_outcomes_align_with_snapshot_order() {
        let mut ticker = Ticker::new();
        ticker.attach(Probe::arc("first"));
        ticker.attach(Probe::failing("second"));
        ticker.attach(Probe::arc("third"));

        let report = ticker.set_price("AAPL", 42.0).await;

        let names: Vec<&'static str> =
            report.outcomes().iter().map(|o| o.observer).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(report.outcomes()[0].is_success());
        assert!(report.outcomes()[1].is_failure());
        assert!(report.outcomes()[2].is_success());
    }

    #[tokio::test]
    async fn test_panicking_observer_is_isolated() {
        let mut ticker = Ticker::new();
        let survivor = Probe::arc("survivor");
        ticker.attach(Arc::new(Panicker));
        ticker.attach(survivor.clone());

        let report = ticker.set_price("AAPL", 10.0).await;

        assert_eq!(survivor.calls(), 1);
        assert_eq!(report.failed(), 1);
        let failure = report.failures().next().expect("panic reported");
        let err = failure.error().expect("failure slot carries the error");
        assert_eq!(err.as_label(), "observer_panicked");
        assert!(err.as_message().contains("observer blew up"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fanout_overlaps_suspensions() {
        let mut ticker = Ticker::new();
        for _ in 0..3 {
            ticker.attach(Arc::new(Sleeper {
                delay: Duration::from_millis(100),
            }));
        }

        let started = tokio::time::Instant::now();
        let report = ticker.set_price("AAPL", 1.0).await;
        let elapsed = started.elapsed();

        assert!(report.is_clean());
        assert!(
            elapsed >= Duration::from_millis(100),
            "cycle must wait for the slowest observer, took {elapsed:?}"
        );
        assert!(
            elapsed < Duration::from_millis(300),
            "deliveries must overlap, not serialize; took {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cycle_waits_for_slowest_observer() {
        let mut ticker = Ticker::new();
        ticker.attach(Arc::new(Sleeper {
            delay: Duration::from_millis(50),
        }));
        ticker.attach(Arc::new(Sleeper {
            delay: Duration::from_millis(200),
        }));
        ticker.attach(Probe::arc("fast"));

        let started = tokio::time::Instant::now();
        ticker.set_price("AAPL", 1.0).await;

        assert!(started.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_and_slow_mix_all_settle_once() {
        let mut ticker = Ticker::new();
        let fast1 = Dashboard::arc();
        let slow = AuditLog::arc(AuditConfig {
            delay: Duration::from_millis(50),
            fail_rate: 0.0,
        });
        let fast2 = Dashboard::arc();
        ticker.attach(fast1.clone());
        ticker.attach(slow.clone());
        ticker.attach(fast2.clone());

        let report = ticker.set_price("AAPL", 150.0).await;

        assert!(report.is_clean());
        assert_eq!(fast1.renders(), 1);
        assert_eq!(fast2.renders(), 1);
        assert_eq!(slow.len(), 1);
        assert_eq!(slow.entries()[0].symbol.as_ref(), "AAPL");
    }

    #[tokio::test]
    async fn test_price_book_tracks_latest() {
        let mut ticker = Ticker::new();
        ticker.set_price("AAPL", 150.0).await;
        ticker.set_price("MSFT", 300.0).await;
        ticker.set_price("AAPL", 90.0).await;

        assert_eq!(ticker.price("AAPL"), Some(90.0));
        assert_eq!(ticker.price("MSFT"), Some(300.0));
        assert_eq!(ticker.price("TSLA"), None);
    }

    #[tokio::test]
    async fn test_empty_registry_resolves_clean() {
        let mut ticker = Ticker::new();
        let report = ticker.set_price("AAPL", 1.0).await;
        assert_eq!(report.total(), 0);
        assert!(report.is_clean());
    }
}
