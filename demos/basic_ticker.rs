//! # Example: basic_ticker
//!
//! Demonstrates the fan-out delivery cycle with the built-in observers.
//!
//! Shows how to:
//! - Attach fast ([`Dashboard`]) and slow ([`AuditLog`]) observers.
//! - Drive a stream of price updates through [`Ticker::set_price`].
//! - Inspect the per-cycle [`NotifyReport`].
//!
//! ## Flow
//! ```text
//! set_price ──► Ticker
//!     ├─► Dashboard.on_quote()   (settles immediately)
//!     ├─► AuditLog.on_quote()    (sleeps, may fail with 20% probability)
//!     ├─► Dashboard.on_quote()   (second chart, proves parallelism)
//!     └─► NotifyReport { outcomes }
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=info cargo run --example basic_ticker
//! ```

use std::time::Duration;

use quotecast::{AuditConfig, AuditLog, Dashboard, ObserverRef, Ticker};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let mut ticker = Ticker::new();

    let chart = Dashboard::arc();
    let audit = AuditLog::arc(AuditConfig {
        delay: Duration::from_millis(400),
        ..AuditConfig::default()
    });
    ticker.attach(chart.clone() as ObserverRef);
    ticker.attach(audit.clone() as ObserverRef);
    ticker.attach(Dashboard::arc() as ObserverRef);

    let updates = [
        ("AAPL", 150.0),
        ("MSFT", 100.0),
        ("AAPL", 187.0),
        ("MSFT", 104.0),
        ("AAPL", 90.0),
    ];

    for (symbol, price) in updates {
        let report = ticker.set_price(symbol, price).await;
        println!(
            "{} ${:<8} delivered={} failed={}",
            symbol,
            price,
            report.total(),
            report.failed()
        );
    }

    println!(
        "chart renders={} journal entries={} (gaps are simulated store failures)",
        chart.renders(),
        audit.len()
    );
}
