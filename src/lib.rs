#![doc(test(attr(deny(warnings))))]

//! Ledger Core offers the record model, credit-score heuristic, and summary
//! primitives behind a manual income/expense/loan tracker. Presentation layers
//! own the widgets; they call into [`services`] and keep a [`ledger::Ledger`]
//! alive for the session.

pub mod errors;
pub mod ledger;
pub mod score;
pub mod services;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledger Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
