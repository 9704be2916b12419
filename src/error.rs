//! Harness-level errors. The order book core never returns these — its
//! failures are reported as events (see `events::EventSink`). This type
//! exists only for the synthetic workload driver, which needs a
//! recoverable error to propagate out of its loop when it detects a
//! crossed book.

use crate::types::Price;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("invariant violated at operation {at_op}: best_bid={best_bid:?} >= best_ask={best_ask:?}")]
    InvariantViolated {
        at_op: u64,
        best_bid: Option<Price>,
        best_ask: Option<Price>,
    },
}
