//! # Example: custom_observer
//!
//! Demonstrates how to build and attach a custom observer.
//!
//! Shows how to:
//! - Implement the [`Observe`] trait.
//! - Fail selectively (here: reject prices under a floor) and watch the
//!   failure land in the [`NotifyReport`] without affecting siblings.
//!
//! ## Run
//! ```bash
//! RUST_LOG=info cargo run --example custom_observer
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use quotecast::{Dashboard, Observe, ObserverError, ObserverRef, Quote, Ticker};

/// Rejects any quote below its configured floor.
/// In real life this could be a risk check or an outbound alert channel.
struct FloorCheck {
    floor: f64,
}

#[async_trait]
impl Observe for FloorCheck {
    async fn on_quote(&self, quote: &Quote) -> Result<(), ObserverError> {
        if quote.price < self.floor {
            return Err(ObserverError::Fail {
                error: format!("{} ${} is below floor ${}", quote.symbol, quote.price, self.floor),
            });
        }
        println!("[floor-check] ok: {} ${}", quote.symbol, quote.price);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "floor-check"
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let mut ticker = Ticker::new();
    ticker.attach(Dashboard::arc() as ObserverRef);
    ticker.attach(Arc::new(FloorCheck { floor: 100.0 }) as ObserverRef);

    for (symbol, price) in [("AAPL", 150.0), ("AAPL", 82.0), ("MSFT", 300.0)] {
        let report = ticker.set_price(symbol, price).await;
        for outcome in report.failures() {
            if let Some(err) = outcome.error() {
                println!("rejected by {}: {}", outcome.observer, err.as_message());
            }
        }
    }
}
