//! # Delivery report: aggregated outcomes of one fan-out cycle.
//!
//! [`NotifyReport`] is what [`Ticker::set_price`](crate::Ticker::set_price)
//! returns: the quote that was delivered plus one [`Outcome`] per observer
//! from the registry snapshot, in snapshot order.
//!
//! The report is a plain value, not an error: a cycle where every observer
//! failed still produces a report, never an `Err`.
//!
//! ## Example
//! ```rust
//! use quotecast::{NotifyReport, ObserverError, Outcome, Quote};
//!
//! let quote = Quote::new("MSFT", 300.0);
//! let report = NotifyReport::new(
//!     quote,
//!     vec![
//!         Outcome::new("dashboard", Ok(())),
//!         Outcome::new("audit-log", Err(ObserverError::Sink { error: "store down".into() })),
//!     ],
//! );
//!
//! assert_eq!(report.total(), 2);
//! assert_eq!(report.failed(), 1);
//! assert_eq!(report.succeeded(), 1);
//! assert!(!report.is_clean());
//! ```

use crate::error::ObserverError;
use crate::quotes::Quote;

/// One observer's settled result for one quote.
///
/// Slots are created by the fan-out, one per snapshotted observer, and keep
/// the observer's [`name`](crate::Observe::name) so failures can be
/// attributed in logs without holding the observer itself.
#[derive(Clone, Debug)]
pub struct Outcome {
    /// Name of the observer this outcome belongs to.
    pub observer: &'static str,
    /// The settled result: `Ok(())` or the captured failure.
    pub result: Result<(), ObserverError>,
}

impl Outcome {
    /// Creates an outcome slot for the named observer.
    pub fn new(observer: &'static str, result: Result<(), ObserverError>) -> Self {
        Self { observer, result }
    }

    /// Returns `true` if the observer settled successfully.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns `true` if the observer settled with a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }

    /// Returns the failure, if any.
    #[inline]
    pub fn error(&self) -> Option<&ObserverError> {
        self.result.as_ref().err()
    }
}

/// Aggregated result of delivering one quote to a registry snapshot.
///
/// ### Properties
/// - `outcomes` is aligned to the snapshot order taken at fan-out start.
/// - Contains every snapshotted observer exactly once, success or failure.
/// - Detached observers are absent: they were not in the snapshot.
#[derive(Clone, Debug)]
pub struct NotifyReport {
    /// The quote that was delivered.
    pub quote: Quote,
    outcomes: Vec<Outcome>,
}

impl NotifyReport {
    /// Assembles a report from the delivered quote and per-observer outcomes.
    pub fn new(quote: Quote, outcomes: Vec<Outcome>) -> Self {
        Self { quote, outcomes }
    }

    /// Per-observer outcomes, aligned to the registry snapshot order.
    #[inline]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Number of observers the quote was delivered to.
    #[inline]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of observers that settled with a failure.
    #[inline]
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    /// Number of observers that settled successfully.
    #[inline]
    pub fn succeeded(&self) -> usize {
        self.outcomes.len() - self.failed()
    }

    /// Returns `true` when no observer failed (including the empty registry).
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }

    /// Iterates over failed outcomes only, in snapshot order.
    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }
}
