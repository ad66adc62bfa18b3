#![doc(test(attr(deny(warnings))))]

//! Expense Reports offers the pure filtering, aggregation, and report
//! assembly primitives behind an expense-tracking client's dashboards.

pub mod currency;
pub mod errors;
pub mod expense;
pub mod report;
pub mod snapshot;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Reports tracing initialized.");
    });
}
