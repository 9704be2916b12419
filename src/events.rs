//! The event sink interface: the only channel through which the core
//! reports trades, acks, and cancel outcomes. The core has no other
//! failure or notification path (see `errors` for the harness-level
//! error type, which is unrelated to this interface).

use crate::types::{OrderId, Price, Qty};

/// A single fill between a resting order and the aggressor that matched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trade {
    pub resting_id: OrderId,
    pub taking_id: OrderId,
    pub price: Price,
    pub qty: Qty,
}

/// The outcome of a `submit_limit_order` call, emitted once per
/// non-rejected submission (accepted) or once per rejected submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAck {
    pub id: OrderId,
    pub accepted: bool,
    pub reason: String,
}

impl OrderAck {
    pub fn accepted(id: OrderId) -> Self {
        Self {
            id,
            accepted: true,
            reason: String::new(),
        }
    }

    pub fn rejected(id: OrderId, reason: &str) -> Self {
        Self {
            id,
            accepted: false,
            reason: reason.to_string(),
        }
    }
}

/// Notification interface the order book invokes synchronously at each
/// well-defined point in `submit_limit_order` and `cancel_order`.
///
/// Implementors MUST NOT call back into the book from any of these
/// methods; the book does not guard against re-entrancy.
pub trait EventSink {
    /// Called once per fill, in fill order.
    fn on_trade(&mut self, trade: Trade);

    /// Called once per non-rejected submission, after all of its trades.
    fn on_order_accepted(&mut self, ack: OrderAck);

    /// Called once per rejected submission; `ack.reason` is non-empty.
    fn on_order_rejected(&mut self, ack: OrderAck);

    /// Called once per cancel attempt, whether or not the id was found.
    fn on_order_cancelled(&mut self, id: OrderId, success: bool);
}
