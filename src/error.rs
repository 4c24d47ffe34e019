//! Error types for observer notification outcomes.
//!
//! A failed observer never fails the notifying call: [`ObserverError`] values
//! travel inside the per-observer outcome slots of a
//! [`NotifyReport`](crate::NotifyReport) and surface only through reporting.
//!
//! The type provides helper methods (`as_label`, `as_message`) for
//! logging/metrics.

use thiserror::Error;

/// # Errors produced by a single observer during notification delivery.
///
/// One observer's error occupies exactly one outcome slot; it is never
/// propagated to the caller of [`Ticker::set_price`](crate::Ticker::set_price)
/// and never affects sibling observers.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObserverError {
    /// A downstream sink (store, display, transport) rejected or dropped the update.
    #[error("sink failure: {error}")]
    Sink {
        /// The underlying error message.
        error: String,
    },

    /// Observer failed with no further classification.
    #[error("update failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Observer panicked while handling the quote.
    ///
    /// Produced by the fan-out itself: the panic is caught at the delivery
    /// boundary and downgraded to this variant, carrying the panic payload
    /// when it was a string.
    #[error("observer panicked: {info}")]
    Panicked {
        /// Downcast panic message, or `"unknown panic"`.
        info: String,
    },
}

impl ObserverError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use quotecast::ObserverError;
    ///
    /// let err = ObserverError::Sink { error: "store unreachable".into() };
    /// assert_eq!(err.as_label(), "sink_failure");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ObserverError::Sink { .. } => "sink_failure",
            ObserverError::Fail { .. } => "observer_failed",
            ObserverError::Panicked { .. } => "observer_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ObserverError::Sink { error } => format!("sink: {error}"),
            ObserverError::Fail { error } => format!("error: {error}"),
            ObserverError::Panicked { info } => format!("panic: {info}"),
        }
    }
}
