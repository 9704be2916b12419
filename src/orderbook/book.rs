//! The order book: two price-ordered sides, each a FIFO-per-level
//! structure, plus the id→locator secondary index. This is the core of
//! the engine; see the module docs in `crate::orderbook` for the
//! invariants it maintains.

use crate::events::{EventSink, OrderAck};
use crate::orderbook::index::IdIndex;
use crate::orderbook::level::PriceLevel;
use crate::orderbook::matching;
use crate::types::{ArrivalSeq, OrderId, OrderRequest, Price, Qty, Side};
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

/// An in-memory, single-instrument limit order book under price-time
/// priority. Not thread-safe: callers must serialize access.
pub struct OrderBook {
    bids: BTreeMap<Price, PriceLevel>,
    asks: BTreeMap<Price, PriceLevel>,
    id_index: IdIndex,
    arrival_counter: ArrivalSeq,
}

impl OrderBook {
    /// Creates an empty book. `expected_orders` sizes the id index up
    /// front to avoid rehashing during a known-size workload.
    pub fn new(expected_orders: usize) -> Self {
        Self {
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            id_index: IdIndex::with_capacity(expected_orders),
            arrival_counter: 0,
        }
    }

    /// The best (highest) bid price, or `None` if no buy orders rest.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.keys().next_back().copied()
    }

    /// The best (lowest) ask price, or `None` if no sell orders rest.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.keys().next().copied()
    }

    /// A read-only depth snapshot for `side`, best price first: each
    /// entry is `(price, total resting quantity at that price)`. Pure
    /// query, no events, intended for printing/inspection only.
    pub fn depth(&self, side: Side) -> Vec<(Price, Qty)> {
        match side {
            Side::Buy => self
                .bids
                .iter()
                .rev()
                .map(|(price, level)| (*price, level.total_qty()))
                .collect(),
            Side::Sell => self
                .asks
                .iter()
                .map(|(price, level)| (*price, level.total_qty()))
                .collect(),
        }
    }

    /// Submits a limit, good-till-cancel order: validates, matches
    /// against the opposite side, rests any residual, and acknowledges.
    ///
    /// Emits, in order: zero or more `on_trade`, then exactly one of
    /// `on_order_accepted` / `on_order_rejected`.
    pub fn submit_limit_order<S: EventSink>(&mut self, sink: &mut S, request: OrderRequest) {
        if request.qty <= 0 {
            warn!(id = request.id, qty = request.qty, "rejecting non-positive quantity");
            sink.on_order_rejected(OrderAck::rejected(request.id, "Non-positive quantity"));
            debug_assert!(self.invariants_hold());
            return;
        }
        if self.id_index.contains(request.id) {
            warn!(id = request.id, "rejecting duplicate order id");
            sink.on_order_rejected(OrderAck::rejected(request.id, "Duplicate order id"));
            debug_assert!(self.invariants_hold());
            return;
        }

        trace!(?request, "matching incoming order");
        let mut remaining = request.qty;
        let mut filled_ids = Vec::new();
        let opposite = match request.side {
            Side::Buy => &mut self.asks,
            Side::Sell => &mut self.bids,
        };
        matching::run(
            sink,
            request.id,
            request.side,
            request.price,
            &mut remaining,
            opposite,
            &mut filled_ids,
        );
        for id in filled_ids {
            self.id_index.remove(id);
        }

        if remaining > 0 {
            self.insert_resting(request.side, request.id, request.price, remaining);
        }

        debug!(id = request.id, filled = request.qty - remaining, "order accepted");
        sink.on_order_accepted(OrderAck::accepted(request.id));
        debug_assert!(self.invariants_hold());
    }

    /// Cancels a resting order by id. Emits `on_order_cancelled(id,
    /// success)`; `success` is `false` if the id is not currently resting.
    pub fn cancel_order<S: EventSink>(&mut self, sink: &mut S, id: OrderId) {
        let Some(locator) = self.id_index.get(id) else {
            trace!(id, "cancel: unknown id");
            sink.on_order_cancelled(id, false);
            debug_assert!(self.invariants_hold());
            return;
        };

        let side_map = match locator.side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let removed = side_map
            .get_mut(&locator.price)
            .and_then(|level| level.remove(id));
        debug_assert!(removed.is_some(), "id_index entry must refer to a live order");

        self.prune_if_empty(locator.side, locator.price);
        self.id_index.remove(id);

        debug!(id, "order cancelled");
        sink.on_order_cancelled(id, true);
        debug_assert!(self.invariants_hold());
    }

    fn insert_resting(&mut self, side: Side, id: OrderId, price: Price, remaining: Qty) {
        self.arrival_counter += 1;
        let seq = self.arrival_counter;
        let side_map = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        side_map
            .entry(price)
            .or_insert_with(|| PriceLevel::new(price))
            .push_back(id, side, remaining, seq);
        self.id_index.insert(id, side, price);
    }

    fn prune_if_empty(&mut self, side: Side, price: Price) {
        let side_map = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        if side_map.get(&price).is_some_and(PriceLevel::is_empty) {
            side_map.remove(&price);
        }
    }

    /// Checks the invariants of the data model; used only under
    /// `debug_assert!` so it never runs in release builds.
    fn invariants_hold(&self) -> bool {
        if let (Some(bid), Some(ask)) = (self.best_bid(), self.best_ask()) {
            if bid >= ask {
                return false;
            }
        }
        for level in self.bids.values().chain(self.asks.values()) {
            if level.is_empty() {
                return false;
            }
        }
        true
    }

    #[cfg(test)]
    pub(crate) fn bid_levels(&self) -> impl Iterator<Item = (&Price, &PriceLevel)> {
        self.bids.iter().rev()
    }

    #[cfg(test)]
    pub(crate) fn ask_levels(&self) -> impl Iterator<Item = (&Price, &PriceLevel)> {
        self.asks.iter()
    }

    #[cfg(test)]
    pub(crate) fn resting_order_count(&self) -> usize {
        self.bids
            .values()
            .chain(self.asks.values())
            .map(|l| l.orders().count())
            .sum()
    }
}
