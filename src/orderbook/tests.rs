//! Scenario tests mirroring the concrete, named examples: simple cross,
//! price improvement, multi-level sweep, FIFO fairness, and the two
//! failure paths.

use super::OrderBook;
use crate::events::{EventSink, OrderAck, Trade};
use crate::types::{OrderId, OrderRequest, Side};

#[derive(Default, Debug)]
struct RecordingSink {
    trades: Vec<Trade>,
    accepted: Vec<OrderId>,
    rejected: Vec<OrderAck>,
    cancelled: Vec<(OrderId, bool)>,
}

impl EventSink for RecordingSink {
    fn on_trade(&mut self, trade: Trade) {
        self.trades.push(trade);
    }
    fn on_order_accepted(&mut self, ack: OrderAck) {
        self.accepted.push(ack.id);
    }
    fn on_order_rejected(&mut self, ack: OrderAck) {
        self.rejected.push(ack);
    }
    fn on_order_cancelled(&mut self, id: OrderId, success: bool) {
        self.cancelled.push((id, success));
    }
}

fn req(id: OrderId, side: Side, price: i64, qty: i64) -> OrderRequest {
    OrderRequest { id, side, price, qty }
}

#[test]
fn s1_simple_cross_with_partial_fill() {
    let mut book = OrderBook::new(0);
    let mut sink = RecordingSink::default();

    book.submit_limit_order(&mut sink, req(1, Side::Buy, 100, 10));
    book.submit_limit_order(&mut sink, req(2, Side::Sell, 101, 5));
    book.submit_limit_order(&mut sink, req(3, Side::Sell, 100, 7));

    assert_eq!(sink.accepted, vec![1, 2, 3]);
    assert_eq!(
        sink.trades,
        vec![Trade { resting_id: 1, taking_id: 3, price: 100, qty: 7 }]
    );
    assert_eq!(book.best_bid(), Some(100));
    assert_eq!(book.best_ask(), Some(101));

    book.cancel_order(&mut sink, 1);
    assert_eq!(sink.cancelled, vec![(1, true)]);
    assert_eq!(book.best_bid(), None);
    assert_eq!(book.best_ask(), Some(101));
}

#[test]
fn s2_price_improvement_fills_at_resting_price() {
    let mut book = OrderBook::new(0);
    let mut sink = RecordingSink::default();

    book.submit_limit_order(&mut sink, req(1, Side::Sell, 100, 10));
    book.submit_limit_order(&mut sink, req(2, Side::Buy, 105, 4));

    assert_eq!(
        sink.trades,
        vec![Trade { resting_id: 1, taking_id: 2, price: 100, qty: 4 }]
    );
}

#[test]
fn s3_multi_level_sweep() {
    let mut book = OrderBook::new(0);
    let mut sink = RecordingSink::default();

    book.submit_limit_order(&mut sink, req(1, Side::Sell, 100, 3));
    book.submit_limit_order(&mut sink, req(2, Side::Sell, 101, 4));
    book.submit_limit_order(&mut sink, req(3, Side::Sell, 102, 5));
    book.submit_limit_order(&mut sink, req(4, Side::Buy, 101, 10));

    assert_eq!(
        sink.trades,
        vec![
            Trade { resting_id: 1, taking_id: 4, price: 100, qty: 3 },
            Trade { resting_id: 2, taking_id: 4, price: 101, qty: 4 },
        ]
    );
    assert_eq!(book.best_bid(), Some(101));
    assert_eq!(book.best_ask(), Some(102));
}

#[test]
fn s4_fifo_within_level() {
    let mut book = OrderBook::new(0);
    let mut sink = RecordingSink::default();

    book.submit_limit_order(&mut sink, req(1, Side::Buy, 100, 5));
    book.submit_limit_order(&mut sink, req(2, Side::Buy, 100, 5));
    book.submit_limit_order(&mut sink, req(3, Side::Sell, 100, 6));

    assert_eq!(
        sink.trades,
        vec![
            Trade { resting_id: 1, taking_id: 3, price: 100, qty: 5 },
            Trade { resting_id: 2, taking_id: 3, price: 100, qty: 1 },
        ]
    );
    let remaining: Vec<_> = book.bid_levels().flat_map(|(_, l)| l.orders()).collect();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);
    assert_eq!(remaining[0].remaining_qty, 4);
}

#[test]
fn s5_cancel_unknown_id() {
    let mut book = OrderBook::new(0);
    let mut sink = RecordingSink::default();

    book.cancel_order(&mut sink, 42);

    assert_eq!(sink.cancelled, vec![(42, false)]);
    assert_eq!(book.resting_order_count(), 0);
}

#[test]
fn s6_reject_non_positive_quantity() {
    let mut book = OrderBook::new(0);
    let mut sink = RecordingSink::default();

    book.submit_limit_order(&mut sink, req(7, Side::Buy, 100, 0));

    assert!(sink.accepted.is_empty());
    assert_eq!(sink.rejected, vec![OrderAck::rejected(7, "Non-positive quantity")]);
    assert_eq!(book.resting_order_count(), 0);
}

#[test]
fn reject_duplicate_live_id() {
    let mut book = OrderBook::new(0);
    let mut sink = RecordingSink::default();

    book.submit_limit_order(&mut sink, req(1, Side::Buy, 100, 5));
    book.submit_limit_order(&mut sink, req(1, Side::Buy, 99, 3));

    assert_eq!(sink.accepted, vec![1]);
    assert_eq!(sink.rejected, vec![OrderAck::rejected(1, "Duplicate order id")]);
    assert_eq!(book.resting_order_count(), 1);
}

#[test]
fn empty_book_queries_return_none() {
    let book = OrderBook::new(0);
    assert_eq!(book.best_bid(), None);
    assert_eq!(book.best_ask(), None);
}

#[test]
fn exact_touch_price_crosses() {
    let mut book = OrderBook::new(0);
    let mut sink = RecordingSink::default();

    book.submit_limit_order(&mut sink, req(1, Side::Sell, 100, 5));
    book.submit_limit_order(&mut sink, req(2, Side::Buy, 100, 5));

    assert_eq!(
        sink.trades,
        vec![Trade { resting_id: 1, taking_id: 2, price: 100, qty: 5 }]
    );
    assert_eq!(book.best_bid(), None);
    assert_eq!(book.best_ask(), None);
}

#[test]
fn partial_fill_then_rest_for_residual() {
    let mut book = OrderBook::new(0);
    let mut sink = RecordingSink::default();

    book.submit_limit_order(&mut sink, req(1, Side::Sell, 100, 5));
    book.submit_limit_order(&mut sink, req(2, Side::Buy, 101, 10));

    assert_eq!(
        sink.trades,
        vec![Trade { resting_id: 1, taking_id: 2, price: 100, qty: 5 }]
    );
    assert_eq!(book.best_bid(), Some(101));
    assert_eq!(book.best_ask(), None);
    assert_eq!(book.resting_order_count(), 1);
}

#[test]
fn cancel_removes_level_when_last_order_leaves() {
    let mut book = OrderBook::new(0);
    let mut sink = RecordingSink::default();

    book.submit_limit_order(&mut sink, req(1, Side::Buy, 100, 5));
    book.cancel_order(&mut sink, 1);

    assert_eq!(sink.cancelled, vec![(1, true)]);
    assert_eq!(book.best_bid(), None);
    assert_eq!(book.bid_levels().count(), 0);
}
