//! # Quote observer trait.
//!
//! Provides [`Observe`] — the capability a type needs to receive price
//! updates from a [`Ticker`](crate::Ticker), and [`ObserverRef`], the shared
//! handle the registry stores.
//!
//! ## Rules
//! - One notification per registered entry per `set_price` call.
//! - A failure affects only this observer's outcome slot; siblings are
//!   unaffected and the ticker never retries.
//! - Delivery is concurrent: do not rely on ordering relative to other
//!   observers' side effects.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ObserverError;
use crate::quotes::Quote;

/// Shared handle to an observer (`Arc<dyn Observe>`), as stored by the registry.
pub type ObserverRef = Arc<dyn Observe>;

/// # Asynchronous quote receiver.
///
/// An observer accepts one quote at a time and settles with `Ok(())` or an
/// [`ObserverError`]. It may suspend (e.g. while talking to a store) before
/// settling; the ticker waits for every observer of a cycle regardless.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Return errors instead of panicking. Panics are caught at the delivery
///   boundary and reported as [`ObserverError::Panicked`], but a panic can
///   leave the observer's own shared state inconsistent.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use quotecast::{Observe, ObserverError, Quote};
///
/// struct Printer;
///
/// #[async_trait]
/// impl Observe for Printer {
///     async fn on_quote(&self, quote: &Quote) -> Result<(), ObserverError> {
///         println!("{} ${}", quote.symbol, quote.price);
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str { "printer" }
/// }
/// ```
#[async_trait]
pub trait Observe: Send + Sync + 'static {
    /// Processes a single quote, settling with success or failure.
    ///
    /// Called once per registered entry per fan-out cycle, concurrently with
    /// the other observers of that cycle.
    async fn on_quote(&self, quote: &Quote) -> Result<(), ObserverError>;

    /// Returns the observer name used in reports and failure logs.
    ///
    /// Prefer short, descriptive names (e.g. "dashboard", "audit-log").
    /// The default uses `type_name::<Self>()`, which can be verbose - override
    /// it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
