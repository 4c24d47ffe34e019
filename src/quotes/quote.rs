//! # Quote: the immutable notification payload.
//!
//! A [`Quote`] is built once per `set_price` call and shared by reference
//! with every observer in the fan-out. Besides the `(symbol, price)` pair it
//! carries a wall-clock timestamp and a globally unique sequence number.
//!
//! ## Ordering guarantees
//! `seq` increases monotonically across all quotes in the process. Observer
//! side effects carry no cross-observer ordering; use `seq` to restore the
//! order in which quotes were issued when side effects interleave.
//!
//! ## Example
//! ```rust
//! use quotecast::Quote;
//!
//! let a = Quote::new("AAPL", 150.0);
//! let b = Quote::new("MSFT", 300.0);
//!
//! assert_eq!(a.symbol.as_ref(), "AAPL");
//! assert!(b.seq > a.seq);
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

/// Global sequence counter for quote ordering.
static QUOTE_SEQ: AtomicU64 = AtomicU64::new(0);

/// One price update, passed by reference to every observer of a fan-out.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs/journals)
#[derive(Clone, Debug, PartialEq)]
pub struct Quote {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp taken when the quote was issued.
    pub at: SystemTime,
    /// Instrument symbol (e.g. `"AAPL"`).
    pub symbol: Arc<str>,
    /// New price for the symbol.
    pub price: f64,
}

impl Quote {
    /// Creates a new quote with current timestamp and next sequence number.
    pub fn new(symbol: impl Into<Arc<str>>, price: f64) -> Self {
        Self {
            seq: QUOTE_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            symbol: symbol.into(),
            price,
        }
    }
}
