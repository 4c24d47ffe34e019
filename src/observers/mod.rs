//! # Quote observers and their registry.
//!
//! This module provides the [`Observe`] trait, the ordered [`ObserverSet`]
//! registry, and the built-in observer implementations.
//!
//! ## Architecture
//! ```text
//! Quote flow:
//!   Ticker ── set_price(Quote) ──► ObserverSet::snapshot()
//!                                       │
//!                                       ├──► Observe::on_quote(&Quote)
//!                                       │         │
//!                                       │    ┌────┴──────┬──────────┐
//!                                       │    ▼           ▼          ▼
//!                                       │  Dashboard  AuditLog   Custom...
//!                                       │
//!                                       └──► outcomes collected in snapshot order
//! ```
//!
//! ## Observer types
//! - **Fast observers** — settle with no suspension, never fail ([`Dashboard`])
//! - **Slow/unreliable observers** — suspend, then may fail ([`AuditLog`])
//!
//! ## Implementing custom observers
//! ```no_run
//! use quotecast::{Observe, ObserverError, Quote};
//! use async_trait::async_trait;
//!
//! struct Alerts;
//!
//! #[async_trait]
//! impl Observe for Alerts {
//!     async fn on_quote(&self, quote: &Quote) -> Result<(), ObserverError> {
//!         if quote.price < 1.0 {
//!             // page someone, push an alert, etc.
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &'static str { "alerts" }
//! }
//! ```

mod audit;
mod dashboard;
mod observer;
mod set;

pub use audit::{AuditConfig, AuditLog};
pub use dashboard::Dashboard;
pub use observer::{Observe, ObserverRef};
pub use set::ObserverSet;
