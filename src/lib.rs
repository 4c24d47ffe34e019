//! # quotecast
//!
//! **Quotecast** is a small async notification library built around a single
//! pattern: one source of state changes, many independent receivers, and a
//! fan-out that never lets one receiver's failure take down the others.
//!
//! It provides a [`Ticker`] (the notifying source), the [`Observe`] trait
//! (the receiving capability), and two built-in observers: a fast
//! [`Dashboard`] and a slow, unreliable [`AuditLog`].
//!
//! ## Architecture
//! ```text
//!            set_price("AAPL", 150.0)
//!                      │
//!                      ▼
//! ┌───────────────────────────────────────────────┐
//! │  Ticker (subject)                             │
//! │  - price book (latest price per symbol)       │
//! │  - ObserverSet (ordered registry)             │
//! └──────────────────────┬────────────────────────┘
//!                        │ snapshot registry, build Quote{seq, at, ...}
//!                        ▼
//!        ┌───────────────┼───────────────┐
//!        ▼               ▼               ▼
//!   observer1        observer2       observerN      (launched together,
//!   .on_quote()      .on_quote()     .on_quote()     settle independently)
//!        │               │               │
//!        ▼               ▼               ▼
//!      Ok(())        Err(Sink)        panic ──► caught, becomes
//!        │               │               │       ObserverError::Panicked
//!        └───────────────┴───────────────┘
//!                        │ join_all (no short-circuit)
//!                        ▼
//!               NotifyReport { outcomes aligned to snapshot order }
//!                        │
//!                        ├─► failures logged (count + per-observer reason)
//!                        └─► returned to the caller (never an Err)
//! ```
//!
//! ## Delivery rules
//! - **Concurrent**: all observers are invoked together; a slow observer
//!   overlaps with fast ones instead of serializing behind them.
//! - **Settle-all**: the call resolves only once every observer has settled,
//!   success or failure. No first-failure cancellation.
//! - **Isolation**: a failing or panicking observer affects only its own
//!   outcome slot. Panics are caught and reported, never propagated.
//! - **Snapshot**: the registry is snapshotted at fan-out start; the outcome
//!   sequence is aligned to that snapshot's order.
//! - **No retries, no timeouts**: an observer that never resolves stalls the
//!   enclosing notification. This is a documented limitation.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use quotecast::{AuditConfig, AuditLog, Dashboard, ObserverRef, Ticker};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut ticker = Ticker::new();
//!
//!     let dashboard = Dashboard::arc();
//!     ticker.attach(dashboard.clone() as ObserverRef);
//!     ticker.attach(AuditLog::arc(AuditConfig {
//!         delay: Duration::from_millis(10),
//!         fail_rate: 0.0,
//!     }));
//!
//!     let report = ticker.set_price("AAPL", 150.0).await;
//!     assert!(report.is_clean());
//!     assert_eq!(dashboard.renders(), 1);
//! }
//! ```
mod error;
mod observers;
mod quotes;
mod ticker;

// ---- Public re-exports ----

pub use error::ObserverError;
pub use observers::{AuditConfig, AuditLog, Dashboard, Observe, ObserverRef, ObserverSet};
pub use quotes::{NotifyReport, Outcome, Quote};
pub use ticker::Ticker;
