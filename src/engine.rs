//! A thin facade over [`OrderBook`] that owns its sink so callers don't
//! have to thread one through every call. Adds no matching logic of its
//! own — see `orderbook::OrderBook` for the actual engine.

use crate::events::EventSink;
use crate::orderbook::OrderBook;
use crate::types::{OrderId, OrderRequest, Price};

/// Pairs an [`OrderBook`] with the sink that receives its events.
pub struct Engine<S: EventSink> {
    book: OrderBook,
    sink: S,
}

impl<S: EventSink> Engine<S> {
    pub fn new(expected_orders: usize, sink: S) -> Self {
        Self {
            book: OrderBook::new(expected_orders),
            sink,
        }
    }

    pub fn submit_limit_order(&mut self, request: OrderRequest) {
        self.book.submit_limit_order(&mut self.sink, request);
    }

    pub fn cancel_order(&mut self, id: OrderId) {
        self.book.cancel_order(&mut self.sink, id);
    }

    pub fn best_bid(&self) -> Option<Price> {
        self.book.best_bid()
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.book.best_ask()
    }

    pub fn depth(&self, side: crate::types::Side) -> Vec<(Price, crate::types::Qty)> {
        self.book.depth(side)
    }

    /// Gives back the owned sink, e.g. to inspect accumulated statistics.
    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
